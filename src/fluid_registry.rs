//! 작업 유체 이름과 CAS 등록번호(물성 조회 ID)의 고정 매핑.

use thiserror::Error;

/// 유체 조회 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// 등록되지 않은 유체 이름
    #[error("알 수 없는 작업 유체: {name}")]
    UnknownFluid { name: String },
}

/// 등록된 작업 유체 한 종.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidIdentity {
    pub display_name: &'static str,
    pub registry_id: &'static str,
    /// 표시 이름 외에 허용하는 다른 이름 (한국어, 러시아어)
    pub aliases: &'static [&'static str],
}

impl FluidIdentity {
    fn matches(&self, query: &str) -> bool {
        self.display_name.to_lowercase() == query
            || self.aliases.iter().any(|alias| alias.to_lowercase() == query)
    }
}

pub static FLUIDS: [FluidIdentity; 10] = [
    FluidIdentity {
        display_name: "nitrogen",
        registry_id: "C7727379",
        aliases: &["질소", "азот"],
    },
    FluidIdentity {
        display_name: "oxygen",
        registry_id: "C7782447",
        aliases: &["산소", "кислород"],
    },
    FluidIdentity {
        display_name: "argon",
        registry_id: "C7440371",
        aliases: &["아르곤", "аргон"],
    },
    FluidIdentity {
        display_name: "methane",
        registry_id: "C74828",
        aliases: &["메탄", "метан"],
    },
    FluidIdentity {
        display_name: "carbon dioxide",
        registry_id: "C124389",
        aliases: &["co2", "이산화탄소", "углекислота"],
    },
    FluidIdentity {
        display_name: "hydrogen",
        registry_id: "C1333740",
        aliases: &["수소", "водород"],
    },
    FluidIdentity {
        display_name: "propane",
        registry_id: "C74986",
        aliases: &["프로판", "пропан"],
    },
    FluidIdentity {
        display_name: "butane",
        registry_id: "C106978",
        aliases: &["부탄", "бутан"],
    },
    FluidIdentity {
        display_name: "helium",
        registry_id: "C7440597",
        aliases: &["헬륨", "гелий"],
    },
    FluidIdentity {
        display_name: "ammonia",
        registry_id: "C7664417",
        aliases: &["암모니아", "аммиак"],
    },
];

/// 유체 이름(대소문자 무시)으로 등록 정보를 찾는다.
pub fn lookup(name: &str) -> Result<&'static FluidIdentity, RegistryError> {
    let query = name.trim().to_lowercase();
    FLUIDS
        .iter()
        .find(|fluid| fluid.matches(&query))
        .ok_or_else(|| RegistryError::UnknownFluid {
            name: name.trim().to_string(),
        })
}

/// 유체 이름을 CAS 등록번호로 변환한다.
pub fn resolve(name: &str) -> Result<&'static str, RegistryError> {
    lookup(name).map(|fluid| fluid.registry_id)
}

/// 안내용 표시 이름 목록.
pub fn display_names() -> impl Iterator<Item = &'static str> {
    FLUIDS.iter().map(|fluid| fluid.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolve_ignores_case_for_every_fluid() {
        for fluid in FLUIDS.iter() {
            let upper = fluid.display_name.to_uppercase();
            assert_eq!(resolve(&upper).unwrap(), fluid.registry_id);
            assert_eq!(resolve(fluid.display_name).unwrap(), fluid.registry_id);
        }
    }

    #[test]
    fn aliases_resolve_to_same_id() {
        assert_eq!(resolve("АЗОТ").unwrap(), "C7727379");
        assert_eq!(resolve("질소").unwrap(), "C7727379");
        assert_eq!(resolve("  CO2 ").unwrap(), "C124389");
    }

    #[test]
    fn registry_ids_are_unique() {
        let ids: HashSet<_> = FLUIDS.iter().map(|f| f.registry_id).collect();
        assert_eq!(ids.len(), FLUIDS.len());
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = resolve("water").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownFluid {
                name: "water".into()
            }
        );
    }
}

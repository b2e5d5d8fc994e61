//! Roles, employees and store employment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{EmployeeId, RoleId, StoreId};
use crate::table::{FieldValue, TableRow, TableSpec};

/// The fixed vocabulary of staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    Cashier,
    Manager,
    Stocker,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
}

impl RoleName {
    /// Every role, in the order role ids are assigned.
    pub const ALL: [RoleName; 5] = [
        RoleName::Cashier,
        RoleName::Manager,
        RoleName::Stocker,
        RoleName::HumanResources,
        RoleName::InformationTechnology,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cashier => "Cashier",
            Self::Manager => "Manager",
            Self::Stocker => "Stocker",
            Self::HumanResources => "Human Resources",
            Self::InformationTechnology => "Information Technology",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: RoleId,
    pub role_name: RoleName,
}

impl TableRow for Role {
    const TABLE: TableSpec = TableSpec {
        name: "roles",
        fields: &["role_id", "role_name"],
        primary_key: Some("role_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.role_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![self.role_id.get().into(), self.role_name.as_str().into()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role_id: RoleId,
    /// Hourly wage when `is_hourly`, otherwise annual salary.
    pub pay: Decimal,
    pub is_hourly: bool,
}

impl TableRow for Employee {
    const TABLE: TableSpec = TableSpec {
        name: "employees",
        fields: &[
            "employee_id",
            "first_name",
            "last_name",
            "role_id",
            "pay",
            "is_hourly",
        ],
        primary_key: Some("employee_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.employee_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.employee_id.get().into(),
            self.first_name.clone().into(),
            self.last_name.clone().into(),
            self.role_id.get().into(),
            self.pay.into(),
            self.is_hourly.into(),
        ]
    }
}

/// Assignment of an employee to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    pub store_id: StoreId,
    pub employee_id: EmployeeId,
}

impl TableRow for Employment {
    const TABLE: TableSpec = TableSpec {
        name: "employment",
        fields: &["store_id", "employee_id"],
        primary_key: None,
    };

    fn key(&self) -> Option<i64> {
        None
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![self.store_id.get().into(), self.employee_id.get().into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_roundtrip() {
        for role in RoleName::ALL {
            assert_eq!(role.as_str().parse::<RoleName>().unwrap(), role);
        }
        assert!("Janitor".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_role_name_serde_uses_display_names() {
        let json = serde_json::to_string(&RoleName::HumanResources).unwrap();
        assert_eq!(json, r#""Human Resources""#);

        let role: RoleName = serde_json::from_str(r#""Information Technology""#).unwrap();
        assert_eq!(role, RoleName::InformationTechnology);
    }

    #[test]
    fn test_employee_values_follow_field_order() {
        let employee = Employee {
            employee_id: EmployeeId::new(4),
            first_name: "Sally".into(),
            last_name: "Ming".into(),
            role_id: RoleId::new(2),
            pay: Decimal::new(2150, 2),
            is_hourly: true,
        };

        let rendered: Vec<String> = employee.values().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["4", "Sally", "Ming", "2", "21.50", "true"]);
        assert_eq!(employee.values().len(), Employee::TABLE.fields.len());
    }

    #[test]
    fn test_employment_has_no_key() {
        let link = Employment {
            store_id: StoreId::new(1),
            employee_id: EmployeeId::new(9),
        };
        assert_eq!(link.key(), None);
        assert_eq!(Employment::TABLE.primary_key, None);
    }
}

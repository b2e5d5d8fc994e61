//! Role, employee and employment generation.

use rand::Rng;
use storefront_core::DatagenError;
use storefront_models::{
    Employee, EmployeeId, Employment, Role, RoleId, RoleName, Store, TableRow,
};

use super::scalars::{DecimalRange, first_names, fork, last_names, pick};

/// Pay band for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPolicy {
    pub pay: DecimalRange,
    pub hourly: bool,
}

/// Hourly roles are paid per hour, salaried roles per year.
pub const fn pay_policy(role: RoleName) -> PayPolicy {
    match role {
        RoleName::Cashier => PayPolicy {
            pay: DecimalRange::new(10, 15, 2),
            hourly: true,
        },
        RoleName::Manager => PayPolicy {
            pay: DecimalRange::new(20, 25, 2),
            hourly: true,
        },
        RoleName::Stocker => PayPolicy {
            pay: DecimalRange::new(15, 20, 2),
            hourly: true,
        },
        RoleName::HumanResources => PayPolicy {
            pay: DecimalRange::new(30_000, 50_000, 2),
            hourly: false,
        },
        RoleName::InformationTechnology => PayPolicy {
            pay: DecimalRange::new(50_000, 70_000, 2),
            hourly: false,
        },
    }
}

/// The first `count` roles of the fixed vocabulary, ids 1.., no duplicates.
pub fn build_roles(count: usize) -> Vec<Role> {
    RoleName::ALL
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, role_name)| Role {
            role_id: RoleId::from_index(i),
            role_name,
        })
        .collect()
}

/// Generates `count` employees, each assigned a random role from `roles` and
/// paid within that role's band.
pub fn build_employees<R: Rng>(
    count: usize,
    roles: &[Role],
    rng: &mut R,
) -> Result<Vec<Employee>, DatagenError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if roles.is_empty() {
        return Err(DatagenError::precondition(
            Employee::TABLE.name,
            Role::TABLE.name,
        ));
    }

    let names = first_names(fork(rng)).zip(last_names(fork(rng)));

    let employees = names
        .take(count)
        .enumerate()
        .map(|(i, (first_name, last_name))| {
            let role = pick(roles, rng);
            let policy = pay_policy(role.role_name);
            Employee {
                employee_id: EmployeeId::from_index(i),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role_id: role.role_id,
                pay: policy.pay.sample(rng),
                is_hourly: policy.hourly,
            }
        })
        .collect();

    Ok(employees)
}

/// Assigns employees to stores.
///
/// Every store first receives one random employee, even when `count` is 0;
/// random pairs are then appended until `count` rows exist. The result
/// therefore holds `max(count, stores.len())` rows and may repeat pairs.
pub fn build_employment<R: Rng>(
    count: usize,
    employees: &[Employee],
    stores: &[Store],
    rng: &mut R,
) -> Result<Vec<Employment>, DatagenError> {
    if count == 0 && stores.is_empty() {
        return Ok(Vec::new());
    }
    if employees.is_empty() {
        return Err(DatagenError::precondition(
            Employment::TABLE.name,
            Employee::TABLE.name,
        ));
    }
    if stores.is_empty() {
        return Err(DatagenError::precondition(
            Employment::TABLE.name,
            Store::TABLE.name,
        ));
    }

    let mut rows = Vec::with_capacity(count.max(stores.len()));

    for store in stores {
        rows.push(Employment {
            store_id: store.store_id,
            employee_id: pick(employees, rng).employee_id,
        });
    }

    while rows.len() < count {
        rows.push(Employment {
            store_id: pick(stores, rng).store_id,
            employee_id: pick(employees, rng).employee_id,
        });
    }

    Ok(rows)
}

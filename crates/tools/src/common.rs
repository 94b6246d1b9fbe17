//! Query-parameter fragments shared across descriptor modules.

use larkmcp_schema::{Schema, enumeration, number, string};

#[must_use]
pub fn user_id_type() -> Schema {
    enumeration(["open_id", "union_id", "user_id"])
        .describe(
            "User ID type. open_id: identifies a user within an app; union_id: identifies a user \
             across apps of the same developer; user_id: identifies a user within a tenant",
        )
        .optional()
}

#[must_use]
pub fn department_id_type() -> Schema {
    enumeration(["open_department_id", "department_id"])
        .describe("Department ID type used in this call")
        .optional()
}

#[must_use]
pub fn job_level_id_type() -> Schema {
    enumeration(["people_admin_job_level_id", "job_level_id"])
        .describe("Job level ID type used in this call")
        .optional()
}

#[must_use]
pub fn job_family_id_type() -> Schema {
    enumeration(["people_admin_job_category_id", "job_family_id"])
        .describe("Job family ID type used in this call")
        .optional()
}

#[must_use]
pub fn employee_type_id_type() -> Schema {
    enumeration(["people_admin_employee_type_id", "employee_type_enum_id"])
        .describe("Employee type ID type used in this call")
        .optional()
}

#[must_use]
pub fn page_size() -> Schema {
    number().describe("Page size").optional()
}

#[must_use]
pub fn page_token() -> Schema {
    string()
        .describe(
            "Page token. Leave empty for the first request; afterwards pass the page_token \
             returned by the previous call",
        )
        .optional()
}

/// `(name, schema)` pairs for the usual ID-type query parameters of hire endpoints.
#[must_use]
pub fn hire_id_types() -> Vec<(&'static str, Schema)> {
    vec![
        ("user_id_type", user_id_type()),
        ("department_id_type", department_id_type()),
        ("job_level_id_type", job_level_id_type()),
        ("job_family_id_type", job_family_id_type()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_optional() {
        for (_, s) in hire_id_types() {
            assert!(!s.is_required());
        }
        assert!(!page_size().is_required());
        assert!(!page_token().is_required());
        assert!(!employee_type_id_type().is_required());
    }
}

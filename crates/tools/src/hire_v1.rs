//! `hire/v1` endpoints (recruiting: jobs, talents, applications, offers, notes, ...).

use crate::common::{
    employee_type_id_type, hire_id_types, job_level_id_type, page_size, page_token, user_id_type,
};
use crate::descriptor::{AccessToken, EndpointDescriptor, HttpMethod, SchemaBundle};
use larkmcp_schema::{Schema, array, boolean, enumeration, number, object, string, union};

const TENANT: &[AccessToken] = &[AccessToken::Tenant];
const TENANT_OR_USER: &[AccessToken] = &[AccessToken::Tenant, AccessToken::User];

/// `extra` followed by the usual ID-type parameters.
fn with_id_types(extra: Vec<(&'static str, Schema)>) -> Schema {
    let mut fields = extra;
    fields.extend(hire_id_types());
    object(fields)
}

fn customized_data_list() -> Schema {
    array(object([
        ("object_id", string().describe("Custom field ID").optional()),
        (
            "value",
            union([string(), number(), array(string())])
                .describe("Custom field value: text, number, or a list of option IDs")
                .optional(),
        ),
    ]))
    .describe("Custom field values")
    .optional()
}

/// Ordered Tool Export List for `hire/v1`.
#[must_use]
pub fn tools() -> Vec<EndpointDescriptor> {
    vec![
        job_get(),
        job_config(),
        job_list(),
        job_combined_create(),
        job_close(),
        job_open(),
        job_recruiter(),
        job_requirement_create(),
        job_requirement_list(),
        job_requirement_update(),
        job_requirement_delete(),
        job_process_list(),
        talent_get(),
        talent_list(),
        talent_add_to_folder(),
        talent_tag(),
        talent_folder_list(),
        application_create(),
        application_get(),
        application_list(),
        application_terminate(),
        application_transfer_stage(),
        application_recover(),
        offer_create(),
        offer_get(),
        offer_list(),
        offer_offer_status(),
        note_create(),
        note_get(),
        note_list(),
        note_patch(),
        note_delete(),
        interview_list(),
        interviewer_patch(),
        referral_get_by_application(),
        employee_get(),
        employee_patch(),
        ehr_import_task_patch(),
    ]
}

#[must_use]
pub fn job_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.get",
        sdk_name: "hire.v1.job.get",
        path: "/open-apis/hire/v1/jobs/:job_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Job-Get job details-Get the details of a job by job ID, \
                      including name, description, department, recruiters and hiring managers",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(with_id_types(Vec::new())),
            path: Some(object([("job_id", string().describe("Job ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn job_config() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.config",
        sdk_name: "hire.v1.job.config",
        path: "/open-apis/hire/v1/jobs/:job_id/config",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Job-Get job settings-Get the offer approval flow, \
                      interview evaluation form and interview rounds configured for a job",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([("job_id", string().describe("Job ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn job_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.list",
        sdk_name: "hire.v1.job.list",
        path: "/open-apis/hire/v1/jobs",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Job-List jobs-List jobs, optionally filtered by last \
                      update time",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(with_id_types(vec![
                (
                    "update_start_time",
                    string()
                        .describe("Earliest update time, millisecond timestamp")
                        .optional(),
                ),
                (
                    "update_end_time",
                    string()
                        .describe("Latest update time, millisecond timestamp")
                        .optional(),
                ),
                ("page_size", page_size()),
                ("page_token", page_token()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn job_combined_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.combinedCreate",
        sdk_name: "hire.v1.job.combinedCreate",
        path: "/open-apis/hire/v1/jobs/combined_create",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Job-Create job-Create a job together with its \
                      recruitment process, recruiters and custom fields",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(with_id_types(Vec::new())),
            path: None,
            data: Some(object([
                ("code", string().describe("Job code").optional()),
                ("title", string().describe("Job title")),
                ("description", string().describe("Job description").optional()),
                ("requirement", string().describe("Job requirements").optional()),
                (
                    "recruitment_type_id",
                    string().describe("Recruitment type ID"),
                ),
                ("department_id", string().describe("Department ID")),
                ("job_type_id", string().describe("Job category ID")),
                (
                    "address_id_list",
                    array(string()).describe("Work location IDs").optional(),
                ),
                ("min_level_id", string().describe("Minimum job level ID").optional()),
                ("max_level_id", string().describe("Maximum job level ID").optional()),
                ("min_salary", number().describe("Minimum monthly salary").optional()),
                ("max_salary", number().describe("Maximum monthly salary").optional()),
                ("head_count", number().describe("Number of openings").optional()),
                (
                    "required_degree",
                    number().describe("Minimum education level").optional(),
                ),
                (
                    "expiry_time",
                    number()
                        .describe("Expiry time, millisecond timestamp")
                        .optional(),
                ),
                ("process_id", string().describe("Recruitment process ID")),
                ("recruiter_id_list", array(string()).describe("Recruiter IDs")),
                (
                    "hiring_manager_id_list",
                    array(string()).describe("Hiring manager IDs"),
                ),
                (
                    "assistant_id_list",
                    array(string()).describe("Assistant IDs").optional(),
                ),
                ("customized_data_list", customized_data_list()),
                (
                    "job_attribute",
                    number()
                        .describe("Job attribute. 1: physical, 2: remote")
                        .optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn job_close() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.close",
        sdk_name: "hire.v1.job.close",
        path: "/open-apis/hire/v1/jobs/:job_id/close",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Job-Close job-Close a job; closed jobs stop \
                      accepting new applications",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([("job_id", string().describe("Job ID"))])),
            data: Some(object([(
                "job_expire_time",
                number()
                    .describe("Time the job closes, millisecond timestamp")
                    .optional(),
            )])),
        },
    }
}

#[must_use]
pub fn job_open() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.open",
        sdk_name: "hire.v1.job.open",
        path: "/open-apis/hire/v1/jobs/:job_id/open",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Job-Reopen job-Reopen a closed job",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([("job_id", string().describe("Job ID"))])),
            data: Some(object([
                (
                    "expiry_time",
                    number()
                        .describe("Expiry time, millisecond timestamp")
                        .optional(),
                ),
                (
                    "is_never_expired",
                    boolean().describe("Whether the job never expires"),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn job_recruiter() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.job.recruiter",
        sdk_name: "hire.v1.job.recruiter",
        path: "/open-apis/hire/v1/jobs/:job_id/recruiter",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Job-Get job team-Get the recruiters, hiring managers \
                      and assistants of a job",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([("job_id", string().describe("Job ID"))])),
            data: None,
        },
    }
}

fn job_requirement_body() -> Vec<(&'static str, Schema)> {
    vec![
        ("name", string().describe("Requirement name")),
        (
            "display_progress",
            number().describe("Progress. 1: pending, 2: not started, 3: in progress, 4: cancelled, 5: paused, 6: completed, 7: expired"),
        ),
        ("head_count", number().describe("Number of openings")),
        (
            "recruitment_type_id",
            string().describe("Recruitment type ID").optional(),
        ),
        (
            "employee_type_id",
            string().describe("Employee type ID").optional(),
        ),
        ("max_level_id", string().describe("Maximum job level ID").optional()),
        ("min_level_id", string().describe("Minimum job level ID").optional()),
        ("department_id", string().describe("Department ID").optional()),
        (
            "recruiter_id_list",
            array(string()).describe("Recruiter IDs").optional(),
        ),
        (
            "jr_hiring_manager_id_list",
            array(string()).describe("Hiring manager IDs").optional(),
        ),
        (
            "start_time",
            string()
                .describe("Start time, millisecond timestamp")
                .optional(),
        ),
        (
            "deadline",
            string().describe("Deadline, millisecond timestamp").optional(),
        ),
        (
            "priority",
            number()
                .describe("Priority. 1: high, 2: medium, 3: low")
                .optional(),
        ),
        ("description", string().describe("Description").optional()),
        ("customized_data_list", customized_data_list()),
        (
            "job_id_list",
            array(string()).describe("Linked job IDs").optional(),
        ),
    ]
}

fn job_requirement_params() -> Schema {
    let mut fields = hire_id_types();
    fields.push(("employee_type_id_type", employee_type_id_type()));
    object(fields)
}

#[must_use]
pub fn job_requirement_create() -> EndpointDescriptor {
    let mut body = vec![("short_code", string().describe("Requirement code"))];
    body.extend(job_requirement_body());
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.jobRequirement.create",
        sdk_name: "hire.v1.jobRequirement.create",
        path: "/open-apis/hire/v1/job_requirements",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Job requirement-Create job requirement-Create a \
                      headcount requirement that jobs can be linked to",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(job_requirement_params()),
            path: None,
            data: Some(object(body)),
        },
    }
}

#[must_use]
pub fn job_requirement_list() -> EndpointDescriptor {
    let mut fields = vec![
        ("page_token", page_token()),
        ("page_size", page_size()),
        ("job_id", string().describe("Linked job ID").optional()),
        (
            "create_time_begin",
            string()
                .describe("Earliest creation time, millisecond timestamp")
                .optional(),
        ),
        (
            "create_time_end",
            string()
                .describe("Latest creation time, millisecond timestamp")
                .optional(),
        ),
        (
            "update_time_begin",
            string()
                .describe("Earliest update time, millisecond timestamp")
                .optional(),
        ),
        (
            "update_time_end",
            string()
                .describe("Latest update time, millisecond timestamp")
                .optional(),
        ),
    ];
    fields.extend(hire_id_types());
    fields.push(("employee_type_id_type", employee_type_id_type()));
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.jobRequirement.list",
        sdk_name: "hire.v1.jobRequirement.list",
        path: "/open-apis/hire/v1/job_requirements",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Job requirement-List job requirements-List job \
                      requirements, optionally filtered by linked job or time range",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object(fields)),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn job_requirement_update() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.jobRequirement.update",
        sdk_name: "hire.v1.jobRequirement.update",
        path: "/open-apis/hire/v1/job_requirements/:job_requirement_id",
        http_method: HttpMethod::Put,
        description: "[Feishu/Lark]-Hire-Job requirement-Update job requirement-Replace the \
                      fields of a job requirement",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(job_requirement_params()),
            path: Some(object([(
                "job_requirement_id",
                string().describe("Job requirement ID"),
            )])),
            data: Some(object(job_requirement_body())),
        },
    }
}

#[must_use]
pub fn job_requirement_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.jobRequirement.delete",
        sdk_name: "hire.v1.jobRequirement.delete",
        path: "/open-apis/hire/v1/job_requirements/:job_requirement_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Hire-Job requirement-Delete job requirement",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([(
                "job_requirement_id",
                string().describe("Job requirement ID"),
            )])),
            data: None,
        },
    }
}

#[must_use]
pub fn job_process_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.jobProcess.list",
        sdk_name: "hire.v1.jobProcess.list",
        path: "/open-apis/hire/v1/job_processes",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Recruitment process-List recruitment processes-List \
                      recruitment processes and their stages",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("page_size", page_size()),
                ("page_token", page_token()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn talent_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.talent.get",
        sdk_name: "hire.v1.talent.get",
        path: "/open-apis/hire/v1/talents/:talent_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Talent-Get talent details-Get basic info, education, \
                      work experience and attachments of a talent",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([("talent_id", string().describe("Talent ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn talent_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.talent.list",
        sdk_name: "hire.v1.talent.list",
        path: "/open-apis/hire/v1/talents",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Talent-List talents-Search talents by keyword or \
                      update time",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                (
                    "keyword",
                    string()
                        .describe("Search keyword: name, phone number or email")
                        .optional(),
                ),
                (
                    "update_start_time",
                    string()
                        .describe("Earliest update time, millisecond timestamp")
                        .optional(),
                ),
                (
                    "update_end_time",
                    string()
                        .describe("Latest update time, millisecond timestamp")
                        .optional(),
                ),
                ("page_size", page_size()),
                ("page_token", page_token()),
                (
                    "sort_by",
                    number()
                        .describe("Sort order. 1: by update time, descending")
                        .optional(),
                ),
                ("user_id_type", user_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn talent_add_to_folder() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.talent.addToFolder",
        sdk_name: "hire.v1.talent.addToFolder",
        path: "/open-apis/hire/v1/talents/add_to_folder",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Talent-Add to folder-Add talents to a talent folder",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: None,
            data: Some(object([
                (
                    "talent_id_list",
                    array(string()).describe("Talent IDs"),
                ),
                ("folder_id", string().describe("Folder ID")),
            ])),
        },
    }
}

#[must_use]
pub fn talent_tag() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.talent.tag",
        sdk_name: "hire.v1.talent.tag",
        path: "/open-apis/hire/v1/talents/:talent_id/tag",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Talent-Tag talent-Add or remove tags on a talent",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([("talent_id", string().describe("Talent ID"))])),
            data: Some(object([
                (
                    "operation",
                    number().describe("Operation. 1: add, 2: remove"),
                ),
                ("tag_id_list", array(string()).describe("Tag IDs")),
            ])),
        },
    }
}

#[must_use]
pub fn talent_folder_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.talentFolder.list",
        sdk_name: "hire.v1.talentFolder.list",
        path: "/open-apis/hire/v1/talent_folders",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Talent folder-List talent folders",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("page_token", page_token()),
                ("page_size", page_size()),
                ("user_id_type", user_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn application_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.create",
        sdk_name: "hire.v1.application.create",
        path: "/open-apis/hire/v1/applications",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Application-Create application-Deliver a talent to a \
                      job, creating an application",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: None,
            data: Some(object([
                ("talent_id", string().describe("Talent ID")),
                ("job_id", string().describe("Job ID")),
                (
                    "user_id",
                    string()
                        .describe("Referrer or owner user ID, per user_id_type")
                        .optional(),
                ),
                (
                    "resume_source_id",
                    string().describe("Resume source ID").optional(),
                ),
                (
                    "application_preferred_city_code_list",
                    array(string())
                        .describe("Preferred city codes")
                        .optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn application_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.get",
        sdk_name: "hire.v1.application.get",
        path: "/open-apis/hire/v1/applications/:application_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Application-Get application-Get application details \
                      including stage, job and talent",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("user_id_type", user_id_type()),
                (
                    "options",
                    array(enumeration(["get_latest_application_on_chain"]))
                        .describe("Extra data to include")
                        .optional(),
                ),
            ])),
            path: Some(object([(
                "application_id",
                string().describe("Application ID"),
            )])),
            data: None,
        },
    }
}

#[must_use]
pub fn application_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.list",
        sdk_name: "hire.v1.application.list",
        path: "/open-apis/hire/v1/applications",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Application-List applications-List application IDs \
                      filtered by process, stage, talent, job or status",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("process_id", string().describe("Process ID").optional()),
                ("stage_id", string().describe("Stage ID").optional()),
                ("talent_id", string().describe("Talent ID").optional()),
                (
                    "active_status",
                    string()
                        .describe("Status. 1: active, 2: terminated")
                        .optional(),
                ),
                ("job_id", string().describe("Job ID").optional()),
                (
                    "lock_status",
                    array(number())
                        .describe("Lock status. 1: unlocked, 2: locked by another job, 3: locked by current job")
                        .optional(),
                ),
                ("page_token", page_token()),
                ("page_size", page_size()),
                (
                    "update_start_time",
                    string()
                        .describe("Earliest update time, millisecond timestamp")
                        .optional(),
                ),
                (
                    "update_end_time",
                    string()
                        .describe("Latest update time, millisecond timestamp")
                        .optional(),
                ),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn application_terminate() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.terminate",
        sdk_name: "hire.v1.application.terminate",
        path: "/open-apis/hire/v1/applications/:application_id/terminate",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Application-Terminate application-End an application \
                      with a termination type and reasons",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([(
                "application_id",
                string().describe("Application ID"),
            )])),
            data: Some(object([
                (
                    "termination_type",
                    number().describe(
                        "Termination type. 1: we rejected, 22: candidate declined, 27: other",
                    ),
                ),
                (
                    "termination_reason_list",
                    array(string()).describe("Termination reason IDs").optional(),
                ),
                (
                    "termination_reason_note",
                    string().describe("Free-text note").optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn application_transfer_stage() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.transferStage",
        sdk_name: "hire.v1.application.transferStage",
        path: "/open-apis/hire/v1/applications/:application_id/transfer_stage",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Application-Transfer stage-Move an application to \
                      another stage of its process",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([(
                "application_id",
                string().describe("Application ID"),
            )])),
            data: Some(object([(
                "stage_id",
                string().describe("Target stage ID"),
            )])),
        },
    }
}

#[must_use]
pub fn application_recover() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.application.recover",
        sdk_name: "hire.v1.application.recover",
        path: "/open-apis/hire/v1/applications/:application_id/recover",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Application-Recover application-Restore a terminated \
                      application",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([(
                "application_id",
                string().describe("Application ID"),
            )])),
            data: None,
        },
    }
}

fn offer_params() -> Schema {
    let mut fields = hire_id_types();
    fields.push(("employee_type_id_type", employee_type_id_type()));
    object(fields)
}

#[must_use]
pub fn offer_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.offer.create",
        sdk_name: "hire.v1.offer.create",
        path: "/open-apis/hire/v1/offers",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Offer-Create offer-Create an offer for an application",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(offer_params()),
            path: None,
            data: Some(object([
                ("application_id", string().describe("Application ID")),
                ("schema_id", string().describe("Offer form ID").optional()),
                (
                    "offer_type",
                    number()
                        .describe("Offer type. 1: with approval, 2: without approval")
                        .optional(),
                ),
                (
                    "basic_info",
                    object([
                        ("department_id", string().describe("Department ID")),
                        ("leader_user_id", string().describe("Direct manager user ID")),
                        (
                            "employment_job_id",
                            string().describe("Position ID").optional(),
                        ),
                        (
                            "employee_type_id",
                            string().describe("Employee type ID").optional(),
                        ),
                        (
                            "onboard_date",
                            string().describe("Onboard date, YYYY-MM-DD").optional(),
                        ),
                        (
                            "probation_month",
                            number().describe("Probation in months").optional(),
                        ),
                        (
                            "contract_year",
                            number().describe("Contract length in years").optional(),
                        ),
                        (
                            "recruitment_type_id",
                            string().describe("Recruitment type ID").optional(),
                        ),
                        ("owner_user_id", string().describe("Offer owner user ID")),
                    ])
                    .describe("Basic offer information")
                    .optional(),
                ),
                (
                    "salary_info",
                    object([
                        ("currency", string().describe("Currency code")),
                        ("basic_salary", string().describe("Basic salary").optional()),
                        (
                            "probation_salary_percentage",
                            string().describe("Probation salary percentage").optional(),
                        ),
                        ("award_salary_multiple", string().optional()),
                        ("option_shares", string().optional()),
                        ("quarterly_bonus", string().optional()),
                        ("half_year_bonus", string().optional()),
                    ])
                    .describe("Salary information")
                    .optional(),
                ),
                (
                    "customized_info_list",
                    array(object([
                        ("id", string().describe("Custom field ID").optional()),
                        ("value", string().describe("Custom field value, JSON encoded").optional()),
                    ]))
                    .optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn offer_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.offer.get",
        sdk_name: "hire.v1.offer.get",
        path: "/open-apis/hire/v1/offers/:offer_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Offer-Get offer-Get offer details including basic \
                      info, salary and approval status",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(offer_params()),
            path: Some(object([("offer_id", string().describe("Offer ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn offer_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.offer.list",
        sdk_name: "hire.v1.offer.list",
        path: "/open-apis/hire/v1/offers",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Offer-List offers-List the offers of a talent",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("page_token", page_token()),
                ("page_size", page_size()),
                ("talent_id", string().describe("Talent ID")),
                ("user_id_type", user_id_type()),
                ("employee_type_id_type", employee_type_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn offer_offer_status() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.offer.offerStatus",
        sdk_name: "hire.v1.offer.offerStatus",
        path: "/open-apis/hire/v1/offers/:offer_id/offer_status",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Hire-Offer-Update offer status-Update the status of an \
                      offer, e.g. accepted or declined",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([("offer_id", string().describe("Offer ID"))])),
            data: Some(object([
                (
                    "offer_status",
                    number().describe(
                        "Offer status. 2: approving, 5: sent, 6: accepted, 7: declined, 8: terminated",
                    ),
                ),
                (
                    "expiration_date",
                    string()
                        .describe("Offer expiration date, YYYY-MM-DD")
                        .optional(),
                ),
                (
                    "termination_reason_id_list",
                    array(string()).describe("Termination reason IDs").optional(),
                ),
                (
                    "termination_reason_note",
                    string().describe("Termination note").optional(),
                ),
            ])),
        },
    }
}

fn mention_entity_list() -> Schema {
    array(object([
        ("offset", number().describe("Offset of the mention in content")),
        ("user_id", string().describe("Mentioned user ID")),
    ]))
    .describe("Users mentioned in the note")
    .optional()
}

#[must_use]
pub fn note_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.note.create",
        sdk_name: "hire.v1.note.create",
        path: "/open-apis/hire/v1/notes",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Hire-Note-Create note-Add a note to a talent, optionally \
                      linked to an application",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: None,
            data: Some(object([
                ("talent_id", string().describe("Talent ID")),
                (
                    "application_id",
                    string().describe("Application ID").optional(),
                ),
                ("creator_id", string().describe("Creator user ID").optional()),
                ("content", string().describe("Note content")),
                (
                    "privacy",
                    number()
                        .describe("Privacy. 1: private, 2: public")
                        .optional(),
                ),
                (
                    "notify_mentioned_user",
                    boolean()
                        .describe("Whether to notify mentioned users")
                        .optional(),
                ),
                ("mention_entity_list", mention_entity_list()),
            ])),
        },
    }
}

#[must_use]
pub fn note_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.note.get",
        sdk_name: "hire.v1.note.get",
        path: "/open-apis/hire/v1/notes/:note_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Note-Get note",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([("note_id", string().describe("Note ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn note_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.note.list",
        sdk_name: "hire.v1.note.list",
        path: "/open-apis/hire/v1/notes",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Note-List notes-List the notes of a talent",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: Some(object([
                ("page_size", page_size()),
                ("page_token", page_token()),
                ("talent_id", string().describe("Talent ID")),
                ("user_id_type", user_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn note_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.note.patch",
        sdk_name: "hire.v1.note.patch",
        path: "/open-apis/hire/v1/notes/:note_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Hire-Note-Update note-Update the content of a note",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([("note_id", string().describe("Note ID"))])),
            data: Some(object([
                ("content", string().describe("Note content")),
                ("operator_id", string().describe("Operator user ID").optional()),
                (
                    "notify_mentioned_user",
                    boolean()
                        .describe("Whether to notify mentioned users")
                        .optional(),
                ),
                ("mention_entity_list", mention_entity_list()),
            ])),
        },
    }
}

#[must_use]
pub fn note_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.note.delete",
        sdk_name: "hire.v1.note.delete",
        path: "/open-apis/hire/v1/notes/:note_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Hire-Note-Delete note",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: None,
            path: Some(object([("note_id", string().describe("Note ID"))])),
            data: None,
        },
    }
}

#[must_use]
pub fn interview_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.interview.list",
        sdk_name: "hire.v1.interview.list",
        path: "/open-apis/hire/v1/interviews",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Interview-List interviews-List interviews by \
                      application, interview ID or time range",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("page_size", page_size()),
                ("page_token", page_token()),
                (
                    "application_id",
                    string().describe("Application ID").optional(),
                ),
                ("interview_id", string().describe("Interview ID").optional()),
                (
                    "start_time",
                    string()
                        .describe("Earliest start time, millisecond timestamp")
                        .optional(),
                ),
                (
                    "end_time",
                    string()
                        .describe("Latest start time, millisecond timestamp")
                        .optional(),
                ),
                ("job_level_id_type", job_level_id_type()),
                ("user_id_type", user_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn interviewer_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.interviewer.patch",
        sdk_name: "hire.v1.interviewer.patch",
        path: "/open-apis/hire/v1/interviewers/:interviewer_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Hire-Interviewer-Update interviewer-Update the tags of an \
                      interviewer",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(object([(
                "interviewer_id",
                string().describe("Interviewer user ID"),
            )])),
            data: Some(object([(
                "interviewer",
                object([
                    ("user_id", string().describe("Interviewer user ID").optional()),
                    (
                        "tag_id_list",
                        array(string()).describe("Interviewer tag IDs").optional(),
                    ),
                ])
                .describe("Interviewer information"),
            )])),
        },
    }
}

#[must_use]
pub fn referral_get_by_application() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.referral.getByApplication",
        sdk_name: "hire.v1.referral.getByApplication",
        path: "/open-apis/hire/v1/referrals/get_by_application",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Referral-Get referral by application-Get the referral \
                      record of an application",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("application_id", string().describe("Application ID")),
                ("user_id_type", user_id_type()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn employee_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.employee.get",
        sdk_name: "hire.v1.employee.get",
        path: "/open-apis/hire/v1/employees/:employee_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Hire-Employee-Get employee-Get onboarding, conversion and \
                      departure information of a hired employee",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(with_id_types(Vec::new())),
            path: Some(object([(
                "employee_id",
                string().describe("Employee ID"),
            )])),
            data: None,
        },
    }
}

#[must_use]
pub fn employee_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.employee.patch",
        sdk_name: "hire.v1.employee.patch",
        path: "/open-apis/hire/v1/employees/:employee_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Hire-Employee-Update employee status-Convert or offboard a \
                      hired employee",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(with_id_types(Vec::new())),
            path: Some(object([(
                "employee_id",
                string().describe("Employee ID"),
            )])),
            data: Some(object([
                (
                    "operation",
                    number().describe("Operation. 1: convert to regular, 2: offboard"),
                ),
                (
                    "conversion_info",
                    object([(
                        "actual_conversion_time",
                        number()
                            .describe("Actual conversion time, millisecond timestamp")
                            .optional(),
                    )])
                    .optional(),
                ),
                (
                    "overboard_info",
                    object([
                        (
                            "actual_overboard_time",
                            number()
                                .describe("Actual departure time, millisecond timestamp")
                                .optional(),
                        ),
                        (
                            "overboard_note",
                            string().describe("Departure reason").optional(),
                        ),
                    ])
                    .optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn ehr_import_task_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "hire",
        name: "hire.v1.ehrImportTask.patch",
        sdk_name: "hire.v1.ehrImportTask.patch",
        path: "/open-apis/hire/v1/ehr_import_tasks/:ehr_import_task_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Hire-EHR import task-Update import task result-Report the \
                      result of importing a hire into an external HR system",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([(
                "ehr_import_task_id",
                string().describe("Import task ID"),
            )])),
            data: Some(object([
                ("fail_reason", string().describe("Failure reason").optional()),
                (
                    "redirect_url",
                    string().describe("Link to the imported record").optional(),
                ),
                (
                    "state",
                    number().describe("Result. 1: success, 2: failure"),
                ),
            ])),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn declared_descriptor_fns() -> Vec<&'static str> {
        include_str!("hire_v1.rs")
            .lines()
            .filter_map(|l| l.strip_prefix("pub fn "))
            .filter(|l| l.ends_with("() -> EndpointDescriptor {"))
            .filter_map(|l| l.split('(').next())
            .collect()
    }

    #[test]
    fn export_list_holds_every_descriptor_in_order() {
        let each: &[fn() -> EndpointDescriptor] = &[
            job_get,
            job_config,
            job_list,
            job_combined_create,
            job_close,
            job_open,
            job_recruiter,
            job_requirement_create,
            job_requirement_list,
            job_requirement_update,
            job_requirement_delete,
            job_process_list,
            talent_get,
            talent_list,
            talent_add_to_folder,
            talent_tag,
            talent_folder_list,
            application_create,
            application_get,
            application_list,
            application_terminate,
            application_transfer_stage,
            application_recover,
            offer_create,
            offer_get,
            offer_list,
            offer_offer_status,
            note_create,
            note_get,
            note_list,
            note_patch,
            note_delete,
            interview_list,
            interviewer_patch,
            referral_get_by_application,
            employee_get,
            employee_patch,
            ehr_import_task_patch,
        ];
        assert_eq!(
            each.len(),
            declared_descriptor_fns().len(),
            "a descriptor fn is missing from this list"
        );
        let expected: Vec<&str> = each.iter().map(|f| f().name).collect();
        let exported: Vec<&str> = tools().iter().map(|d| d.name).collect();
        assert_eq!(exported, expected);
    }

    #[test]
    fn export_list_has_no_duplicates() {
        let tools = tools();
        let names: HashSet<&str> = tools.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn every_descriptor_belongs_to_hire_v1() {
        for d in tools() {
            assert_eq!(d.project, "hire");
            assert!(d.name.starts_with("hire.v1."), "{}", d.name);
            assert_eq!(d.sdk_name, d.name);
            assert!(d.path.starts_with("/open-apis/hire/v1/"), "{}", d.path);
        }
    }

    #[test]
    fn job_get_shape() {
        let d = job_get();
        assert_eq!(d.http_method, HttpMethod::Get);
        assert_eq!(
            d.schema.path.as_ref().map(Schema::required_fields),
            Some(vec!["job_id"])
        );
        assert!(d.schema.data.is_none());
    }

    #[test]
    fn job_requirement_create_requires_short_code() {
        let d = job_requirement_create();
        let data = d.schema.data.expect("body");
        let required = data.required_fields();
        assert!(required.contains(&"short_code"));
        assert!(required.contains(&"name"));
        assert!(!required.contains(&"description"));
    }
}

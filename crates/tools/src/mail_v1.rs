//! `mail/v1` endpoints (mail groups, public mailboxes, user mailboxes).

use crate::common::{department_id_type, page_size, page_token, user_id_type};
use crate::descriptor::{AccessToken, EndpointDescriptor, HttpMethod, SchemaBundle};
use larkmcp_schema::{Schema, array, boolean, enumeration, object, string};

const TENANT: &[AccessToken] = &[AccessToken::Tenant];
const TENANT_OR_USER: &[AccessToken] = &[AccessToken::Tenant, AccessToken::User];

fn mailgroup_path() -> Schema {
    object([(
        "mailgroup_id",
        string().describe("Mail group ID or mail group address"),
    )])
}

fn public_mailbox_path() -> Schema {
    object([(
        "public_mailbox_id",
        string().describe("Public mailbox ID or public mailbox address"),
    )])
}

fn user_mailbox_path() -> Schema {
    object([(
        "user_mailbox_id",
        string().describe("User mailbox address"),
    )])
}

fn who_can_send_mail() -> Schema {
    enumeration(["ANYONE", "ALL_INTERNAL_USERS", "ALL_GROUP_MEMBERS", "CUSTOM_MEMBERS"])
        .describe(
            "Who can send mail to the group. ANYONE: any sender; ALL_INTERNAL_USERS: anyone in \
             the tenant; ALL_GROUP_MEMBERS: group members; CUSTOM_MEMBERS: permission members",
        )
        .optional()
}

fn mailgroup_body() -> Vec<(&'static str, Schema)> {
    vec![
        ("email", string().describe("Mail group address").optional()),
        ("name", string().describe("Mail group name").optional()),
        (
            "description",
            string().describe("Mail group description").optional(),
        ),
        ("who_can_send_mail", who_can_send_mail()),
    ]
}

fn member_type() -> Schema {
    enumeration([
        "USER",
        "DEPARTMENT",
        "COMPANY",
        "EXTERNAL_USER",
        "MAIL_GROUP",
        "PUBLIC_MAILBOX",
        "OTHER_MEMBER",
    ])
    .describe("Member type")
}

fn mailgroup_member() -> Vec<(&'static str, Schema)> {
    vec![
        (
            "email",
            string()
                .describe("Member address, for EXTERNAL_USER, MAIL_GROUP and OTHER_MEMBER")
                .optional(),
        ),
        (
            "user_id",
            string().describe("Member user ID, for USER").optional(),
        ),
        (
            "department_id",
            string()
                .describe("Member department ID, for DEPARTMENT")
                .optional(),
        ),
        ("type", member_type().optional()),
    ]
}

fn member_params() -> Schema {
    object([
        ("user_id_type", user_id_type()),
        ("department_id_type", department_id_type()),
    ])
}

/// Ordered Tool Export List for `mail/v1`.
#[must_use]
pub fn tools() -> Vec<EndpointDescriptor> {
    vec![
        mailgroup_create(),
        mailgroup_delete(),
        mailgroup_get(),
        mailgroup_list(),
        mailgroup_patch(),
        mailgroup_update(),
        mailgroup_alias_create(),
        mailgroup_alias_delete(),
        mailgroup_alias_list(),
        mailgroup_member_batch_create(),
        mailgroup_member_batch_delete(),
        mailgroup_member_create(),
        mailgroup_member_delete(),
        mailgroup_member_get(),
        mailgroup_member_list(),
        mailgroup_permission_member_create(),
        public_mailbox_create(),
        public_mailbox_delete(),
        public_mailbox_get(),
        public_mailbox_list(),
        public_mailbox_patch(),
        public_mailbox_member_create(),
        public_mailbox_member_clear(),
        public_mailbox_member_list(),
        user_query(),
        user_mailbox_delete(),
        user_mailbox_alias_create(),
        user_mailbox_alias_delete(),
        user_mailbox_alias_list(),
    ]
}

#[must_use]
pub fn mailgroup_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.create",
        sdk_name: "mail.v1.mailgroup.create",
        path: "/open-apis/mail/v1/mailgroups",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Mailgroup-Create mail group-Create a mail group",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: None,
            data: Some(object(mailgroup_body())),
        },
    }
}

#[must_use]
pub fn mailgroup_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.delete",
        sdk_name: "mail.v1.mailgroup.delete",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-Mailgroup-Delete mail group",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.get",
        sdk_name: "mail.v1.mailgroup.get",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Mailgroup-Get mail group-Get a mail group's name, \
                      description, member count and send permission",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.list",
        sdk_name: "mail.v1.mailgroup.list",
        path: "/open-apis/mail/v1/mailgroups",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Mailgroup-List mail groups-List mail groups, \
                      optionally filtered by manager",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                (
                    "manager_user_id",
                    string().describe("Mail group manager user ID").optional(),
                ),
                ("user_id_type", user_id_type()),
                ("page_token", page_token()),
                ("page_size", page_size()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.patch",
        sdk_name: "mail.v1.mailgroup.patch",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Email-Mailgroup-Patch mail group-Update some fields of a \
                      mail group; omitted fields keep their value",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: Some(object(mailgroup_body())),
        },
    }
}

#[must_use]
pub fn mailgroup_update() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroup.update",
        sdk_name: "mail.v1.mailgroup.update",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id",
        http_method: HttpMethod::Put,
        description: "[Feishu/Lark]-Email-Mailgroup-Update mail group-Replace all fields of a \
                      mail group; omitted fields are cleared",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: Some(object(mailgroup_body())),
        },
    }
}

#[must_use]
pub fn mailgroup_alias_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupAlias.create",
        sdk_name: "mail.v1.mailgroupAlias.create",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/aliases",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Mailgroup-Alias-Create alias-Add an alias address to \
                      a mail group",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: Some(object([(
                "email_alias",
                string().describe("Alias address").optional(),
            )])),
        },
    }
}

#[must_use]
pub fn mailgroup_alias_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupAlias.delete",
        sdk_name: "mail.v1.mailgroupAlias.delete",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/aliases/:alias_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-Mailgroup-Alias-Delete alias",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(object([
                (
                    "mailgroup_id",
                    string().describe("Mail group ID or mail group address"),
                ),
                ("alias_id", string().describe("Alias address to remove")),
            ])),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_alias_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupAlias.list",
        sdk_name: "mail.v1.mailgroupAlias.list",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/aliases",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Mailgroup-Alias-List aliases",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_member_batch_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.batchCreate",
        sdk_name: "mail.v1.mailgroupMember.batchCreate",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members/batch_create",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-Batch create members-Add several \
                      members to a mail group in one call",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(member_params()),
            path: Some(mailgroup_path()),
            data: Some(object([(
                "items",
                array(object(mailgroup_member()))
                    .describe("Members to add")
                    .optional(),
            )])),
        },
    }
}

#[must_use]
pub fn mailgroup_member_batch_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.batchDelete",
        sdk_name: "mail.v1.mailgroupMember.batchDelete",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members/batch_delete",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-Batch delete members-Remove several \
                      members from a mail group in one call",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_path()),
            data: Some(object([(
                "member_id_list",
                array(string())
                    .describe("IDs of the members to remove")
                    .optional(),
            )])),
        },
    }
}

#[must_use]
pub fn mailgroup_member_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.create",
        sdk_name: "mail.v1.mailgroupMember.create",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-Create member-Add a user, \
                      department, external address or mail group to a mail group",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(member_params()),
            path: Some(mailgroup_path()),
            data: Some(object(mailgroup_member())),
        },
    }
}

fn mailgroup_member_path() -> Schema {
    object([
        (
            "mailgroup_id",
            string().describe("Mail group ID or mail group address"),
        ),
        ("member_id", string().describe("Member ID within the mail group")),
    ])
}

#[must_use]
pub fn mailgroup_member_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.delete",
        sdk_name: "mail.v1.mailgroupMember.delete",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members/:member_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-Delete member",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(mailgroup_member_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_member_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.get",
        sdk_name: "mail.v1.mailgroupMember.get",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members/:member_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-Get member",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(member_params()),
            path: Some(mailgroup_member_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_member_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupMember.list",
        sdk_name: "mail.v1.mailgroupMember.list",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/members",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Mailgroup-Member-List members",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("user_id_type", user_id_type()),
                ("department_id_type", department_id_type()),
                ("page_token", page_token()),
                ("page_size", page_size()),
            ])),
            path: Some(mailgroup_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn mailgroup_permission_member_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.mailgroupPermissionMember.create",
        sdk_name: "mail.v1.mailgroupPermissionMember.create",
        path: "/open-apis/mail/v1/mailgroups/:mailgroup_id/permission_members",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Mailgroup-Permission member-Create permission \
                      member-Allow a user or department to send to a CUSTOM_MEMBERS mail group",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(member_params()),
            path: Some(mailgroup_path()),
            data: Some(object([
                ("user_id", string().describe("User ID, for USER").optional()),
                (
                    "department_id",
                    string().describe("Department ID, for DEPARTMENT").optional(),
                ),
                (
                    "email",
                    string().describe("Address, for MAIL_GROUP and PUBLIC_MAILBOX").optional(),
                ),
                (
                    "type",
                    enumeration(["USER", "DEPARTMENT", "MAIL_GROUP", "PUBLIC_MAILBOX"])
                        .describe("Permission member type")
                        .optional(),
                ),
            ])),
        },
    }
}

fn public_mailbox_body() -> Vec<(&'static str, Schema)> {
    vec![
        ("email", string().describe("Public mailbox address").optional()),
        ("name", string().describe("Public mailbox name").optional()),
        (
            "geo",
            string()
                .describe("Data residency region of the mailbox")
                .optional(),
        ),
    ]
}

#[must_use]
pub fn public_mailbox_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailbox.create",
        sdk_name: "mail.v1.publicMailbox.create",
        path: "/open-apis/mail/v1/public_mailboxes",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Public mailbox-Create public mailbox",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: None,
            data: Some(object(public_mailbox_body())),
        },
    }
}

#[must_use]
pub fn public_mailbox_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailbox.delete",
        sdk_name: "mail.v1.publicMailbox.delete",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-Public mailbox-Delete public mailbox-Permanently \
                      delete a public mailbox that is already in the recycle bin",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(public_mailbox_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn public_mailbox_get() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailbox.get",
        sdk_name: "mail.v1.publicMailbox.get",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Public mailbox-Get public mailbox",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(public_mailbox_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn public_mailbox_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailbox.list",
        sdk_name: "mail.v1.publicMailbox.list",
        path: "/open-apis/mail/v1/public_mailboxes",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Public mailbox-List public mailboxes",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("page_token", page_token()),
                ("page_size", page_size()),
            ])),
            path: None,
            data: None,
        },
    }
}

#[must_use]
pub fn public_mailbox_patch() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailbox.patch",
        sdk_name: "mail.v1.publicMailbox.patch",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id",
        http_method: HttpMethod::Patch,
        description: "[Feishu/Lark]-Email-Public mailbox-Patch public mailbox-Update the name \
                      or address of a public mailbox",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(public_mailbox_path()),
            data: Some(object([
                ("email", string().describe("Public mailbox address").optional()),
                ("name", string().describe("Public mailbox name").optional()),
            ])),
        },
    }
}

#[must_use]
pub fn public_mailbox_member_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailboxMember.create",
        sdk_name: "mail.v1.publicMailboxMember.create",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id/members",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Public mailbox-Member-Create member-Give a user \
                      access to a public mailbox",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([("user_id_type", user_id_type())])),
            path: Some(public_mailbox_path()),
            data: Some(object([
                ("user_id", string().describe("Member user ID").optional()),
                (
                    "type",
                    enumeration(["USER"]).describe("Member type").optional(),
                ),
            ])),
        },
    }
}

#[must_use]
pub fn public_mailbox_member_clear() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailboxMember.clear",
        sdk_name: "mail.v1.publicMailboxMember.clear",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id/members/clear",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-Public mailbox-Member-Clear members-Remove every \
                      member of a public mailbox",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: Some(public_mailbox_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn public_mailbox_member_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.publicMailboxMember.list",
        sdk_name: "mail.v1.publicMailboxMember.list",
        path: "/open-apis/mail/v1/public_mailboxes/:public_mailbox_id/members",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-Public mailbox-Member-List members",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                ("user_id_type", user_id_type()),
                ("page_token", page_token()),
                ("page_size", page_size()),
            ])),
            path: Some(public_mailbox_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn user_query() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.user.query",
        sdk_name: "mail.v1.user.query",
        path: "/open-apis/mail/v1/users/query",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-User-Query mail address status-Check whether \
                      addresses belong to users, mail groups or public mailboxes, and their \
                      status",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: None,
            path: None,
            data: Some(object([(
                "email_list",
                array(string()).describe("Addresses to query"),
            )])),
        },
    }
}

#[must_use]
pub fn user_mailbox_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.userMailbox.delete",
        sdk_name: "mail.v1.userMailbox.delete",
        path: "/open-apis/mail/v1/user_mailboxes/:user_mailbox_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-User mailbox-Release mailbox address-Release the \
                      address of an offboarded user, optionally transferring its mail",
        access_tokens: TENANT,
        schema: SchemaBundle {
            params: Some(object([
                (
                    "transfer_mailbox",
                    string()
                        .describe("Mailbox that receives the released mailbox's mail")
                        .optional(),
                ),
                (
                    "transfer_mailbox_forward",
                    boolean()
                        .describe("Whether new mail is forwarded to transfer_mailbox")
                        .optional(),
                ),
            ])),
            path: Some(user_mailbox_path()),
            data: None,
        },
    }
}

#[must_use]
pub fn user_mailbox_alias_create() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.userMailboxAlias.create",
        sdk_name: "mail.v1.userMailboxAlias.create",
        path: "/open-apis/mail/v1/user_mailboxes/:user_mailbox_id/aliases",
        http_method: HttpMethod::Post,
        description: "[Feishu/Lark]-Email-User mailbox-Alias-Create alias",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: None,
            path: Some(user_mailbox_path()),
            data: Some(object([(
                "email_alias",
                string().describe("Alias address").optional(),
            )])),
        },
    }
}

#[must_use]
pub fn user_mailbox_alias_delete() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.userMailboxAlias.delete",
        sdk_name: "mail.v1.userMailboxAlias.delete",
        path: "/open-apis/mail/v1/user_mailboxes/:user_mailbox_id/aliases/:alias_id",
        http_method: HttpMethod::Delete,
        description: "[Feishu/Lark]-Email-User mailbox-Alias-Delete alias",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: None,
            path: Some(object([
                ("user_mailbox_id", string().describe("User mailbox address")),
                ("alias_id", string().describe("Alias address to remove")),
            ])),
            data: None,
        },
    }
}

#[must_use]
pub fn user_mailbox_alias_list() -> EndpointDescriptor {
    EndpointDescriptor {
        project: "mail",
        name: "mail.v1.userMailboxAlias.list",
        sdk_name: "mail.v1.userMailboxAlias.list",
        path: "/open-apis/mail/v1/user_mailboxes/:user_mailbox_id/aliases",
        http_method: HttpMethod::Get,
        description: "[Feishu/Lark]-Email-User mailbox-Alias-List aliases",
        access_tokens: TENANT_OR_USER,
        schema: SchemaBundle {
            params: Some(object([
                ("page_token", page_token()),
                ("page_size", page_size()),
            ])),
            path: Some(user_mailbox_path()),
            data: None,
        },
    }
}

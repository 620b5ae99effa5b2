//! Endpoint registry: logical operation name → URL path template.
//!
//! Templates use `{param}` placeholders; `Endpoint::path` substitutes them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Logout,
    UserInfo,
    GetAllLeaveType,
    ApplyLeaveApplication,
    LeaveSummary,
    PendingApprovals,
    ApprovalAction,
    Employees,
    Employee,
    DepartmentOptions,
    TitleOptions,
    ManagerOptions,
}

impl Endpoint {
    pub const ALL: [Self; 13] = [
        Self::Login,
        Self::Logout,
        Self::UserInfo,
        Self::GetAllLeaveType,
        Self::ApplyLeaveApplication,
        Self::LeaveSummary,
        Self::PendingApprovals,
        Self::ApprovalAction,
        Self::Employees,
        Self::Employee,
        Self::DepartmentOptions,
        Self::TitleOptions,
        Self::ManagerOptions,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::UserInfo => "userInfo",
            Self::GetAllLeaveType => "getAllLeaveType",
            Self::ApplyLeaveApplication => "applyLeaveApplication",
            Self::LeaveSummary => "leaveSummary",
            Self::PendingApprovals => "pendingApprovals",
            Self::ApprovalAction => "approvalAction",
            Self::Employees => "employees",
            Self::Employee => "employee",
            Self::DepartmentOptions => "departmentOptions",
            Self::TitleOptions => "titleOptions",
            Self::ManagerOptions => "managerOptions",
        }
    }

    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Login => "/api/login",
            Self::Logout => "/api/logout",
            Self::UserInfo => "/api/user",
            Self::GetAllLeaveType => "/api/leaveapplications/getallleavetype",
            Self::ApplyLeaveApplication => "/api/leaveapplications/applyingleaveapplication",
            Self::LeaveSummary => "/api/leaveapplications/summary",
            Self::PendingApprovals => "/api/approvals/pending",
            Self::ApprovalAction => "/api/approvals/{stepId}/{action}",
            Self::Employees => "/api/employees",
            Self::Employee => "/api/employees/{id}",
            Self::DepartmentOptions => "/api/options/departments",
            Self::TitleOptions => "/api/options/titles",
            Self::ManagerOptions => "/api/options/managers",
        }
    }

    /// Fill `{param}` placeholders. Unknown params are ignored; missing ones
    /// stay in the output untouched.
    #[must_use]
    pub fn path(self, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.template().to_owned(), |path, (key, value)| {
                path.replace(&format!("{{{key}}}"), value)
            })
    }

    /// Template path for endpoints without placeholders.
    #[must_use]
    pub fn fixed(self) -> String {
        self.template().to_owned()
    }
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod tests;

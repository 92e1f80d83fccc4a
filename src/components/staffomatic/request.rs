/// Resource path suffixes, relative to `{hostname}{subdomain}/`
pub mod paths {
    pub const ACCOUNT: &str = "account.json";
    pub const DEPARTMENTS: &str = "departments.json";
    pub const SHIFTS: &str = "shifts.json";

    pub fn location(location_id: u64) -> String {
        format!("locations/{}.json", location_id)
    }

    pub fn department(department_id: u64) -> String {
        format!("departments/{}.json", department_id)
    }

    pub fn location_schedules(location_id: u64) -> String {
        format!("locations/{}/schedules.json", location_id)
    }

    pub fn schedule_shifts(schedule_id: u64) -> String {
        format!("schedules/{}/shifts.json", schedule_id)
    }
}

/// Join hostname, subdomain and a resource suffix into a request URL.
///
/// The parts are concatenated as `hostname + subdomain + "/" + suffix`; no
/// separator is added between hostname and subdomain and nothing is validated.
pub fn build_request_url(hostname: &str, subdomain: &str, suffix: &str) -> String {
    format!("{}{}/{}", hostname, subdomain, suffix)
}

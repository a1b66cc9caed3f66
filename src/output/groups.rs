//! Group membership report rows

use crate::output::Report;
use crate::tableau::{Group, User};

/// Build the group membership report, one row per group and member
///
/// Groups without members still get a single row so they remain visible in
/// the output.
pub fn membership_report(groups: &[(Group, Vec<User>)]) -> Report {
    let mut report = Report::new(&[
        "Group ID",
        "Group Name",
        "Group Domain",
        "User Name",
        "Full Name",
        "Email",
        "Site Role",
    ]);

    for (group, members) in groups {
        if members.is_empty() {
            report.push_row(vec![
                group.id.clone(),
                group.name.clone(),
                group.domain_name().to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ]);
            continue;
        }
        for member in members {
            report.push_row(vec![
                group.id.clone(),
                group.name.clone(),
                group.domain_name().to_string(),
                member.name.clone(),
                member.full_name().to_string(),
                member.email().to_string(),
                member.site_role().to_string(),
            ]);
        }
    }

    report
}

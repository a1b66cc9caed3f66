//! User report rows: content ownership and sign-in inactivity

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::output::{short_date, Report};
use crate::tableau::User;

/// Build the user report, flagging users who own published content
///
/// `owner_ids` is the union of owner LUIDs across workbooks, data sources and
/// flows. Content owners sort first so the accounts that need attention
/// before an offboarding are at the top.
pub fn ownership_report(users: &[User], owner_ids: &HashSet<String>) -> Report {
    let mut report = Report::new(&[
        "ID",
        "Name",
        "Full Name",
        "Email",
        "Site Role",
        "Owns Content",
    ]);

    let mut sorted: Vec<&User> = users.iter().collect();
    sorted.sort_by(|a, b| {
        let a_owns = owner_ids.contains(&a.id);
        let b_owns = owner_ids.contains(&b.id);
        b_owns.cmp(&a_owns).then_with(|| a.name.cmp(&b.name))
    });

    for user in sorted {
        let owns = if owner_ids.contains(&user.id) {
            "Yes"
        } else {
            "No"
        };
        report.push_row(vec![
            user.id.clone(),
            user.name.clone(),
            user.full_name().to_string(),
            user.email().to_string(),
            user.site_role().to_string(),
            owns.to_string(),
        ]);
    }

    report
}

/// Users who have not signed in since the cutoff, oldest sign-in first
///
/// Missing or unparseable sign-in timestamps count as never signed in.
/// Already unlicensed accounts are skipped since there is no seat left to
/// reclaim.
pub fn inactive_report(users: &[User], cutoff: DateTime<Utc>) -> Report {
    let mut inactive: Vec<&User> = users
        .iter()
        .filter(|u| u.site_role() != "Unlicensed")
        .filter(|u| last_sign_in(u).map_or(true, |t| t < cutoff))
        .collect();
    inactive.sort_by_key(|u| last_sign_in(u));

    let mut report = Report::new(&["ID", "Name", "Email", "Site Role", "Last Sign-in"]);
    for user in inactive {
        report.push_row(vec![
            user.id.clone(),
            user.name.clone(),
            user.email().to_string(),
            user.site_role().to_string(),
            user.last_login
                .as_deref()
                .map(short_date)
                .unwrap_or_else(|| "never".to_string()),
        ]);
    }
    report
}

fn last_sign_in(user: &User) -> Option<DateTime<Utc>> {
    user.last_login
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "email": format!("{}@example.com", name),
            "siteRole": "Creator"
        }))
        .unwrap()
    }

    #[test]
    fn test_owners_flagged_and_sorted_first() {
        let users = vec![user("u-1", "aaron"), user("u-2", "zoe"), user("u-3", "mia")];
        let owner_ids: HashSet<String> = ["u-2".to_string()].into_iter().collect();

        let report = ownership_report(&users, &owner_ids);

        assert_eq!(report.len(), 3);
        let names = report.column("Name");
        assert_eq!(names, vec!["zoe", "aaron", "mia"]);
        let owns = report.column("Owns Content");
        assert_eq!(owns, vec!["Yes", "No", "No"]);
    }

    #[test]
    fn test_no_owners() {
        let users = vec![user("u-1", "aaron")];
        let report = ownership_report(&users, &HashSet::new());
        assert_eq!(report.column("Owns Content"), vec!["No"]);
    }

    fn user_with_login(id: &str, name: &str, role: &str, last_login: Option<&str>) -> User {
        let mut value = serde_json::json!({
            "id": id,
            "name": name,
            "siteRole": role
        });
        if let Some(ts) = last_login {
            value["lastLogin"] = serde_json::json!(ts);
        }
        serde_json::from_value(value).unwrap()
    }

    fn cutoff() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_inactive_report_splits_on_cutoff() {
        let users = vec![
            user_with_login("u-1", "busy", "Creator", Some("2026-06-01T08:00:00Z")),
            user_with_login("u-2", "idle", "Explorer", Some("2024-03-01T08:00:00Z")),
        ];

        let report = inactive_report(&users, cutoff());

        assert_eq!(report.column("Name"), vec!["idle"]);
        assert_eq!(report.column("Last Sign-in"), vec!["2024-03-01 08:00"]);
    }

    #[test]
    fn test_inactive_report_never_signed_in_sorts_first() {
        let users = vec![
            user_with_login("u-1", "idle", "Explorer", Some("2024-03-01T08:00:00Z")),
            user_with_login("u-2", "ghost", "Viewer", None),
        ];

        let report = inactive_report(&users, cutoff());

        assert_eq!(report.column("Name"), vec!["ghost", "idle"]);
        assert_eq!(report.column("Last Sign-in"), vec!["never", "2024-03-01 08:00"]);
    }

    #[test]
    fn test_inactive_report_skips_unlicensed() {
        let users = vec![user_with_login("u-1", "gone", "Unlicensed", None)];
        assert!(inactive_report(&users, cutoff()).is_empty());
    }
}

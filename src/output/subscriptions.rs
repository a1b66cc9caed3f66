//! Subscription report rows

use std::collections::HashMap;

use crate::output::Report;
use crate::tableau::{Subscription, User, View, Workbook};

/// Build the subscription report with content and recipient context
///
/// Subscriptions carry only LUIDs, so the content name and address come from
/// joining against the workbook and view lists, and the recipient details
/// from the user list. Unresolvable references keep their row with blank
/// context rather than dropping it.
pub fn subscriptions_report(
    subscriptions: &[Subscription],
    workbooks: &[Workbook],
    views: &[View],
    users: &[User],
    server: &str,
    site: &str,
) -> Report {
    let workbooks_by_id: HashMap<&str, &Workbook> =
        workbooks.iter().map(|w| (w.id.as_str(), w)).collect();
    let views_by_id: HashMap<&str, &View> = views.iter().map(|v| (v.id.as_str(), v)).collect();
    let users_by_id: HashMap<&str, &User> = users.iter().map(|u| (u.id.as_str(), u)).collect();

    let mut report = Report::new(&[
        "ID",
        "Subject",
        "Suspended",
        "Content Type",
        "Content Name",
        "Address",
        "Recipient",
        "Recipient Email",
        "Schedule",
    ]);

    for sub in subscriptions {
        let (content_name, address) = match sub.content_type() {
            "Workbook" => workbooks_by_id
                .get(sub.content_id())
                .map(|w| (w.name.clone(), w.webpage_url().to_string()))
                .unwrap_or_default(),
            "View" => views_by_id
                .get(sub.content_id())
                .map(|v| (v.name.clone(), v.address(server, site)))
                .unwrap_or_default(),
            _ => Default::default(),
        };

        let recipient = users_by_id.get(sub.user_id());
        report.push_row(vec![
            sub.id.clone(),
            sub.subject().to_string(),
            if sub.is_suspended() { "Yes" } else { "No" }.to_string(),
            sub.content_type().to_string(),
            content_name,
            address,
            recipient.map(|u| u.name.clone()).unwrap_or_default(),
            recipient.map(|u| u.email().to_string()).unwrap_or_default(),
            sub.schedule_name().to_string(),
        ]);
    }

    report
}

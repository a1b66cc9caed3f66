//! Suspended task report rows

use std::collections::HashMap;

use crate::output::Report;
use crate::tableau::{
    Datasource, ExtractRefreshTask, Flow, FlowRunTask, Subscription, User, View, Workbook,
};

/// The three suspended task reports, grouped for printing and for the
/// HTML reminder
pub struct SuspendedTasks {
    pub extracts: Report,
    pub flows: Report,
    pub subscriptions: Report,
}

impl SuspendedTasks {
    pub fn total(&self) -> usize {
        self.extracts.len() + self.flows.len() + self.subscriptions.len()
    }

    /// Distinct owner emails across all three reports, sorted
    pub fn recipients(&self) -> Vec<String> {
        let mut emails: Vec<String> = self
            .extracts
            .column("Content Owner Email")
            .into_iter()
            .chain(self.flows.column("Flow Owner Email"))
            .chain(self.subscriptions.column("Content Owner Email"))
            .filter(|e| !e.is_empty())
            .map(|e| e.to_string())
            .collect();
        emails.sort();
        emails.dedup();
        emails
    }
}

/// Suspended extract refresh tasks with data source or workbook context
pub fn extract_report(
    tasks: &[ExtractRefreshTask],
    datasources: &[Datasource],
    workbooks: &[Workbook],
) -> Report {
    let datasources_by_id: HashMap<&str, &Datasource> =
        datasources.iter().map(|d| (d.id.as_str(), d)).collect();
    let workbooks_by_id: HashMap<&str, &Workbook> =
        workbooks.iter().map(|w| (w.id.as_str(), w)).collect();

    let mut report = Report::new(&[
        "Extract ID",
        "Extract Type",
        "Failure Count",
        "Content Name",
        "Content URL",
        "Content Owner Email",
    ]);

    for task in tasks {
        let (name, url, email) = match task.extract_type() {
            "Data source" => datasources_by_id
                .get(task.content_id())
                .map(|d| {
                    (
                        d.name.clone(),
                        d.webpage_url().to_string(),
                        d.owner_email().to_string(),
                    )
                })
                .unwrap_or_default(),
            _ => workbooks_by_id
                .get(task.content_id())
                .map(|w| {
                    (
                        w.name.clone(),
                        w.webpage_url().to_string(),
                        w.owner_email().to_string(),
                    )
                })
                .unwrap_or_default(),
        };

        report.push_row(vec![
            task.content_id().to_string(),
            task.extract_type().to_string(),
            task.consecutive_failed_count.to_string(),
            name,
            url,
            email,
        ]);
    }

    report
}

/// Suspended flow run tasks with flow context
pub fn flow_report(tasks: &[FlowRunTask], flows: &[Flow]) -> Report {
    let flows_by_id: HashMap<&str, &Flow> = flows.iter().map(|f| (f.id.as_str(), f)).collect();

    let mut report = Report::new(&[
        "Flow ID",
        "Flow Name",
        "Task Type",
        "Failure Count",
        "Flow URL",
        "Flow Owner Email",
    ]);

    for task in tasks {
        let flow = flows_by_id.get(task.flow_id());
        report.push_row(vec![
            task.flow_id().to_string(),
            task.flow_name().to_string(),
            task.task_type().to_string(),
            task.consecutive_failed_count.to_string(),
            flow.map(|f| f.webpage_url().to_string()).unwrap_or_default(),
            flow.map(|f| f.owner_email().to_string()).unwrap_or_default(),
        ]);
    }

    report
}

/// Suspended subscriptions with content and owner context
pub fn subscription_report(
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
        "Subscription ID",
        "Subject",
        "Recipient Name",
        "Content Type",
        "Content Name",
        "Content URL",
        "Content Owner Email",
    ]);

    for sub in subscriptions.iter().filter(|s| s.is_suspended()) {
        let (name, url, email) = match sub.content_type() {
            "Workbook" => workbooks_by_id
                .get(sub.content_id())
                .map(|w| {
                    (
                        w.name.clone(),
                        w.webpage_url().to_string(),
                        w.owner_email().to_string(),
                    )
                })
                .unwrap_or_default(),
            "View" => views_by_id
                .get(sub.content_id())
                .map(|v| {
                    (
                        v.name.clone(),
                        v.address(server, site),
                        v.owner_email().to_string(),
                    )
                })
                .unwrap_or_default(),
            _ => Default::default(),
        };

        let recipient = users_by_id
            .get(sub.user_id())
            .map(|u| u.name.clone())
            .unwrap_or_default();

        report.push_row(vec![
            sub.id.clone(),
            sub.subject().to_string(),
            recipient,
            sub.content_type().to_string(),
            name,
            url,
            email,
        ]);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datasource(id: &str, name: &str, email: &str) -> Datasource {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "webpageUrl": format!("https://tableau.example.com/#/datasources/{}", id),
            "owner": { "id": "u-1", "email": email }
        }))
        .unwrap()
    }

    fn extract_task(content_id: &str, failures: u32) -> ExtractRefreshTask {
        serde_json::from_value(serde_json::json!({
            "id": "t-1",
            "consecutiveFailedCount": failures,
            "datasource": { "id": content_id }
        }))
        .unwrap()
    }

    #[test]
    fn test_extract_report_joins_owner_email() {
        let tasks = vec![extract_task("ds-1", 5)];
        let datasources = vec![datasource("ds-1", "Sales", "jdoe@example.com")];

        let report = extract_report(&tasks, &datasources, &[]);

        assert_eq!(report.len(), 1);
        assert_eq!(report.column("Content Name"), vec!["Sales"]);
        assert_eq!(
            report.column("Content Owner Email"),
            vec!["jdoe@example.com"]
        );
    }

    #[test]
    fn test_extract_report_unresolved_content() {
        let tasks = vec![extract_task("ds-gone", 5)];
        let report = extract_report(&tasks, &[], &[]);
        assert_eq!(report.column("Content Owner Email"), vec![""]);
    }

    #[test]
    fn test_subscription_report_filters_active() {
        let subs: Vec<Subscription> = vec![
            serde_json::from_value(serde_json::json!({
                "id": "s-1",
                "subject": "Suspended one",
                "suspended": true,
                "content": { "id": "wb-1", "type": "Workbook" },
                "user": { "id": "u-1" }
            }))
            .unwrap(),
            serde_json::from_value(serde_json::json!({
                "id": "s-2",
                "subject": "Active one",
                "suspended": false,
                "content": { "id": "wb-1", "type": "Workbook" },
                "user": { "id": "u-1" }
            }))
            .unwrap(),
        ];

        let report =
            subscription_report(&subs, &[], &[], &[], "https://tableau.example.com", "analytics");

        assert_eq!(report.len(), 1);
        assert_eq!(report.column("Subject"), vec!["Suspended one"]);
    }

    #[test]
    fn test_recipients_distinct_and_sorted() {
        let tasks = vec![extract_task("ds-1", 5), extract_task("ds-2", 5)];
        let datasources = vec![
            datasource("ds-1", "Sales", "zoe@example.com"),
            datasource("ds-2", "Costs", "ann@example.com"),
        ];

        let suspended = SuspendedTasks {
            extracts: extract_report(&tasks, &datasources, &[]),
            flows: flow_report(&[], &[]),
            subscriptions: Report::new(&["Content Owner Email"]),
        };

        assert_eq!(
            suspended.recipients(),
            vec!["ann@example.com".to_string(), "zoe@example.com".to_string()]
        );
        assert_eq!(suspended.total(), 2);
    }
}

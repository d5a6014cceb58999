use crate::domain::{Contact, Interaction, InteractionKind, Priority};
use crate::dto::{
    AnalyticsDto, ContactListItemDto, DashboardDto, DayCountDto, InteractionDto, LabelCountDto,
};
use crate::query::{find_contact, recent_contacts, recent_interactions};
use crate::rules::{
    current_week, local_date, within_trailing_days, FollowUpWindow, WeekStart, MONTH_DAYS,
    WEEK_DAYS,
};
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;

pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_TOP_COMPANIES: usize = 5;

/// Clock, locale and tuning knobs shared by the summary views.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
    pub week_start: WeekStart,
    pub follow_up: FollowUpWindow,
    pub recent_limit: usize,
    pub top_companies: usize,
}

impl ViewContext {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            now,
            offset,
            week_start: WeekStart::default(),
            follow_up: FollowUpWindow::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            top_companies: DEFAULT_TOP_COMPANIES,
        }
    }
}

pub fn count_by_priority(contacts: &[Contact]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for contact in contacts {
        *counts.entry(contact.priority).or_insert(0) += 1;
    }
    counts
}

pub fn count_by_kind(interactions: &[Interaction]) -> BTreeMap<InteractionKind, usize> {
    let mut counts = BTreeMap::new();
    for interaction in interactions {
        *counts.entry(interaction.kind).or_insert(0) += 1;
    }
    counts
}

/// Contacts per non-empty company, most common first. Ties keep the order in
/// which companies first appear.
pub fn top_companies(contacts: &[Contact], limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for contact in contacts {
        if contact.company.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(name, _)| *name == contact.company) {
            Some((_, count)) => *count += 1,
            None => counts.push((contact.company.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

pub fn count_within_last_week(interactions: &[Interaction], now: DateTime<Utc>) -> usize {
    interactions
        .iter()
        .filter(|interaction| within_trailing_days(interaction.date, now, WEEK_DAYS))
        .count()
}

pub fn weekly_trend(
    interactions: &[Interaction],
    now: DateTime<Utc>,
    offset: FixedOffset,
    week_start: WeekStart,
) -> Vec<DayCountDto> {
    current_week(now, offset, week_start)
        .into_iter()
        .map(|day| DayCountDto {
            date: day,
            label: day.format("%a").to_string(),
            count: interactions
                .iter()
                .filter(|interaction| local_date(interaction.date, offset) == day)
                .count(),
        })
        .collect()
}

pub fn count_needing_follow_up(
    contacts: &[Contact],
    now: DateTime<Utc>,
    window: FollowUpWindow,
) -> usize {
    contacts
        .iter()
        .filter(|contact| window.needs_follow_up(contact, now))
        .count()
}

/// Rounded mean over a thirty day month.
pub fn average_per_day(total_interactions: usize) -> usize {
    let days = MONTH_DAYS as usize;
    (total_interactions + days / 2) / days
}

pub fn dashboard(
    contacts: &[Contact],
    interactions: &[Interaction],
    view: &ViewContext,
) -> DashboardDto {
    DashboardDto {
        total_contacts: contacts.len(),
        interactions_this_week: count_within_last_week(interactions, view.now),
        high_priority: contacts
            .iter()
            .filter(|contact| contact.priority == Priority::High)
            .count(),
        follow_ups: count_needing_follow_up(contacts, view.now, view.follow_up),
        recent_contacts: recent_contacts(contacts, view.recent_limit)
            .into_iter()
            .map(ContactListItemDto::from)
            .collect(),
        recent_interactions: recent_interactions(interactions, view.recent_limit)
            .into_iter()
            .map(|interaction| {
                InteractionDto::new(
                    interaction,
                    find_contact(contacts, &interaction.contact_id),
                )
            })
            .collect(),
    }
}

pub fn analytics(
    contacts: &[Contact],
    interactions: &[Interaction],
    view: &ViewContext,
) -> AnalyticsDto {
    AnalyticsDto {
        total_contacts: contacts.len(),
        total_interactions: interactions.len(),
        interactions_this_week: count_within_last_week(interactions, view.now),
        average_per_day: average_per_day(interactions.len()),
        by_priority: count_by_priority(contacts)
            .into_iter()
            .map(|(priority, count)| LabelCountDto {
                label: priority.as_str().to_string(),
                count,
            })
            .collect(),
        by_kind: count_by_kind(interactions)
            .into_iter()
            .map(|(kind, count)| LabelCountDto {
                label: kind.as_str().to_string(),
                count,
            })
            .collect(),
        weekly_trend: weekly_trend(interactions, view.now, view.offset, view.week_start),
        top_companies: top_companies(contacts, view.top_companies)
            .into_iter()
            .map(|(label, count)| LabelCountDto { label, count })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        analytics, average_per_day, count_by_kind, count_by_priority, count_needing_follow_up,
        count_within_last_week, dashboard, top_companies, weekly_trend, ViewContext,
    };
    use crate::domain::{
        sample_contacts, sample_interactions, Contact, ContactId, Interaction, InteractionId,
        InteractionKind, Priority,
    };
    use crate::dto::UNKNOWN_CONTACT_NAME;
    use crate::rules::{FollowUpWindow, WeekStart};
    use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        // Wednesday.
        Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn contact(id: &str, company: &str, priority: Priority) -> Contact {
        Contact {
            id: ContactId::from(id),
            name: format!("Contact {id}"),
            email: String::new(),
            phone: String::new(),
            company: company.to_string(),
            position: String::new(),
            relationship: String::new(),
            priority,
            tags: vec![],
            notes: None,
            created_at: now() - Duration::days(60),
            last_contact: None,
        }
    }

    fn interaction(id: &str, contact_id: &str, kind: InteractionKind, at: DateTime<Utc>) -> Interaction {
        Interaction {
            id: InteractionId::from(id),
            contact_id: ContactId::from(contact_id),
            kind,
            subject: format!("Subject {id}"),
            notes: None,
            date: at,
        }
    }

    #[test]
    fn priority_and_kind_counts() {
        let contacts = sample_contacts();
        let by_priority = count_by_priority(&contacts);
        assert_eq!(by_priority.get(&Priority::High), Some(&1));
        assert_eq!(by_priority.get(&Priority::Medium), Some(&1));
        assert_eq!(by_priority.get(&Priority::Low), None);

        let by_kind = count_by_kind(&sample_interactions());
        assert_eq!(by_kind.get(&InteractionKind::Email), Some(&1));
        assert_eq!(by_kind.get(&InteractionKind::Call), Some(&1));
    }

    #[test]
    fn top_companies_ranks_and_skips_blank() {
        let contacts = vec![
            contact("1", "Acme", Priority::Low),
            contact("2", "Globex", Priority::Low),
            contact("3", "", Priority::Low),
            contact("4", "Globex", Priority::Low),
            contact("5", "Initech", Priority::Low),
        ];
        let ranked = top_companies(&contacts, 2);
        assert_eq!(
            ranked,
            vec![("Globex".to_string(), 2), ("Acme".to_string(), 1)]
        );
    }

    #[test]
    fn last_week_count_is_trailing_seven_days() {
        let interactions = vec![
            interaction("1", "a", InteractionKind::Call, now() - Duration::days(1)),
            interaction("2", "a", InteractionKind::Call, now() - Duration::days(6)),
            interaction("3", "a", InteractionKind::Call, now() - Duration::days(8)),
        ];
        assert_eq!(count_within_last_week(&interactions, now()), 2);
    }

    #[test]
    fn weekly_trend_buckets_by_local_day() {
        let interactions = vec![
            interaction("1", "a", InteractionKind::Call, now()),
            interaction("2", "a", InteractionKind::Call, now() - Duration::hours(1)),
            interaction("3", "a", InteractionKind::Email, now() - Duration::days(3)),
            interaction("4", "a", InteractionKind::Email, now() - Duration::days(10)),
        ];
        let trend = weekly_trend(&interactions, now(), utc(), WeekStart::Sunday);
        let labels: Vec<&str> = trend.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        let counts: Vec<usize> = trend.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn follow_up_counts_one_to_two_weeks_stale() {
        let mut stale = contact("1", "", Priority::High);
        stale.last_contact = Some(now() - Duration::days(10));
        let mut fresh = contact("2", "", Priority::High);
        fresh.last_contact = Some(now() - Duration::days(2));
        let mut never = contact("3", "", Priority::High);
        never.created_at = now() - Duration::days(9);
        let contacts = vec![stale, fresh, never];
        assert_eq!(
            count_needing_follow_up(&contacts, now(), FollowUpWindow::default()),
            2
        );
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(average_per_day(0), 0);
        assert_eq!(average_per_day(14), 0);
        assert_eq!(average_per_day(15), 1);
        assert_eq!(average_per_day(45), 2);
    }

    #[test]
    fn dashboard_uses_placeholder_for_dangling_contact() {
        let contacts = vec![contact("1", "Acme", Priority::High)];
        let interactions = vec![
            interaction("1", "1", InteractionKind::Meeting, now() - Duration::days(1)),
            interaction("2", "ghost", InteractionKind::Text, now()),
        ];
        let view = ViewContext::new(now(), utc());
        let summary = dashboard(&contacts, &interactions, &view);
        assert_eq!(summary.total_contacts, 1);
        assert_eq!(summary.high_priority, 1);
        assert_eq!(summary.interactions_this_week, 2);
        assert_eq!(summary.recent_interactions[0].contact_name, UNKNOWN_CONTACT_NAME);
        assert_eq!(summary.recent_interactions[1].contact_name, "Contact 1");
    }

    #[test]
    fn analytics_report_collects_breakdowns() {
        let contacts = sample_contacts();
        let interactions = sample_interactions();
        let view = ViewContext::new(now(), utc());
        let report = analytics(&contacts, &interactions, &view);
        assert_eq!(report.total_contacts, 2);
        assert_eq!(report.total_interactions, 2);
        assert_eq!(report.interactions_this_week, 0);
        assert_eq!(report.by_priority.len(), 2);
        assert_eq!(report.by_priority[0].label, "High");
        assert_eq!(report.weekly_trend.len(), 7);
        assert_eq!(report.top_companies.len(), 2);
    }
}

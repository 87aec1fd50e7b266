//! Canned results returned by the demo endpoints

use serde::Serialize;

/// Calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: String,
}

/// Email summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub subject: String,
    pub snippet: String,
}

/// Web search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebResult {
    pub title: String,
    pub url: String,
}

/// Data served by each demo endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    /// Template event; `start`/`end` are the defaults when the request has none
    pub calendar_event: CalendarEvent,
    pub emails: Vec<Email>,
    pub web_results: Vec<WebResult>,
}

impl FixtureSet {
    /// The demo data set
    #[must_use]
    pub fn demo() -> Self {
        Self {
            calendar_event: CalendarEvent {
                title: "Demo: TAELED803 class".to_string(),
                start: "2025-08-18T09:00:00Z".to_string(),
                end: "2025-08-18T11:00:00Z".to_string(),
                location: "Haymarket 222".to_string(),
            },
            emails: vec![
                Email {
                    from: "Azmal Khokan".to_string(),
                    subject: "Classroom change TAELED803".to_string(),
                    snippet: "New room 222 from 4–19 Aug".to_string(),
                },
                Email {
                    from: "CCFO Team".to_string(),
                    subject: "15th Anniversary Details".to_string(),
                    snippet: "Red carpet interviews and outfits".to_string(),
                },
            ],
            web_results: vec![
                WebResult {
                    title: "CCFO 15th Anniversary".to_string(),
                    url: "https://example.com/ccfo".to_string(),
                },
                WebResult {
                    title: "PTE Tips".to_string(),
                    url: "https://example.com/pte".to_string(),
                },
            ],
        }
    }

    /// Calendar event spanning the requested window, or the default window
    #[must_use]
    pub fn calendar_event(&self, start: Option<String>, end: Option<String>) -> CalendarEvent {
        CalendarEvent {
            start: start.unwrap_or_else(|| self.calendar_event.start.clone()),
            end: end.unwrap_or_else(|| self.calendar_event.end.clone()),
            ..self.calendar_event.clone()
        }
    }

    /// First `limit` emails; all of them when `limit` is `None` or too large
    #[must_use]
    pub fn emails(&self, limit: Option<usize>) -> &[Email] {
        let n = limit.map_or(self.emails.len(), |n| n.min(self.emails.len()));
        &self.emails[..n]
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::demo()
    }
}

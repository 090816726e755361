//! Subscription records and the option catalogs offered by the form.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;

use crate::widget::widgets::Selectable;

/// A service a subscription pays for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct App {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Name of the icon the host draws for the app.
    pub icon_name: Option<String>,
}

impl App {
    /// Create an app entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_name: None,
        }
    }

    /// Set the icon name using builder pattern.
    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }
}

impl Selectable for App {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// A spending category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Name of the icon the host draws for the category.
    pub icon: Option<String>,
}

impl Category {
    /// Create a category entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
        }
    }

    /// Set the icon name using builder pattern.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Selectable for Category {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// How often a subscription bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    #[default]
    Weekly,
    Monthly,
    Annually,
}

impl Frequency {
    /// Every option, in display order.
    pub const ALL: [Frequency; 3] = [Self::Weekly, Self::Monthly, Self::Annually];

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Selectable for Frequency {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// When to remind the user before a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemindMe {
    OneDayBefore,
    #[default]
    TwoDaysBefore,
    ThreeDaysBefore,
    OneWeekBefore,
}

impl RemindMe {
    /// Every option, in display order.
    pub const ALL: [RemindMe; 4] = [
        Self::OneDayBefore,
        Self::TwoDaysBefore,
        Self::ThreeDaysBefore,
        Self::OneWeekBefore,
    ];

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDayBefore => "1 day before",
            Self::TwoDaysBefore => "2 days before",
            Self::ThreeDaysBefore => "3 days before",
            Self::OneWeekBefore => "1 week before",
        }
    }
}

impl fmt::Display for RemindMe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Selectable for RemindMe {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// A subscription record as edited by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub app: Option<App>,
    pub amount: f64,
    pub category: Option<Category>,
    pub start_date: NaiveDate,
    pub frequency: Frequency,
    pub remind_me: RemindMe,
    pub active: bool,
}

/// The apps the form offers.
pub fn app_catalog() -> Vec<App> {
    [
        ("1", "Netflix", "Netflix"),
        ("2", "Spotify", "Spotify"),
        ("3", "New York Times", "NewYorkTimes"),
        ("4", "Wall Street Journal", "WallStreetJournal"),
        ("5", "Hulu", "Hulu"),
        ("6", "Apple", "Apple"),
        ("7", "Amazon", "Amazon"),
    ]
    .into_iter()
    .map(|(id, name, icon)| App::new(id, name).with_icon(icon))
    .collect()
}

/// The categories the form offers.
pub fn category_catalog() -> Vec<Category> {
    [
        ("1", "Subscription", "Subscription"),
        ("2", "Utility", "Utility"),
        ("3", "Card Payment", "CardPayment"),
        ("4", "Loan", "Loan"),
        ("5", "Rent", "Rent"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category::new(id, name).with_icon(icon))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs() {
        let apps = app_catalog();
        assert_eq!(apps.len(), 7);
        assert_eq!(apps[2].name, "New York Times");
        assert_eq!(apps[2].icon_name.as_deref(), Some("NewYorkTimes"));

        let categories = category_catalog();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[2].icon.as_deref(), Some("CardPayment"));
    }

    #[test]
    fn test_option_labels() {
        let labels: Vec<_> = RemindMe::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            labels,
            vec!["1 day before", "2 days before", "3 days before", "1 week before"]
        );
        assert_eq!(Frequency::Annually.label(), "Annually");
        assert_eq!(Frequency::default(), Frequency::Weekly);
        assert_eq!(RemindMe::default(), RemindMe::TwoDaysBefore);
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The dialog's working set of months. Click order is preserved; toggling a
/// month that is already selected removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct MonthSelection(Vec<String>);

impl MonthSelection {
    pub fn toggle(&mut self, month: &str) {
        if let Some(pos) = self.0.iter().position(|m| m == month) {
            self.0.remove(pos);
        } else {
            self.0.push(month.to_string());
        }
    }

    pub fn contains(&self, month: &str) -> bool {
        self.0.iter().any(|m| m == month)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn months(&self) -> &[String] {
        &self.0
    }

    pub fn into_months(self) -> Vec<String> {
        self.0
    }
}

use validator::ValidationError;

use crate::shared_roulette::PrizeSlice;
use crate::validation::validate_probability;

/// Raw input values of one editable prize row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrizeRow {
    pub name: String,
    pub probability: String,
}

/// The admin form's prize rows. Never holds fewer than one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeRowList {
    rows: Vec<PrizeRow>,
}

impl Default for PrizeRowList {
    fn default() -> Self {
        Self {
            rows: vec![PrizeRow::default()],
        }
    }
}

impl PrizeRowList {
    pub fn new(rows: Vec<PrizeRow>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    pub fn from_prizes(prizes: &[PrizeSlice]) -> Self {
        Self::new(
            prizes
                .iter()
                .map(|prize| PrizeRow {
                    name: prize.name.clone(),
                    probability: prize.probability.to_string(),
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[PrizeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether remove controls should be shown.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Appends a blank row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(PrizeRow::default());
        self.rows.len() - 1
    }

    /// Removes the row at `index`; refused when it is the last remaining row.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn set_name(&mut self, index: usize, name: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.name = name;
        }
    }

    pub fn set_probability(&mut self, index: usize, probability: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.probability = probability;
        }
    }

    /// Index of the first row whose probability is not a usable number.
    pub fn validate(&self) -> Result<(), (usize, ValidationError)> {
        for (index, row) in self.rows.iter().enumerate() {
            validate_probability(&row.probability).map_err(|e| (index, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, probability: &str) -> PrizeRow {
        PrizeRow {
            name: name.to_string(),
            probability: probability.to_string(),
        }
    }

    #[test]
    fn test_never_empty() {
        let list = PrizeRowList::new(Vec::new());
        assert_eq!(list.len(), 1);
        assert!(!list.can_remove());
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut list = PrizeRowList::new(vec![filled("頭獎", "1")]);
        assert!(!list.remove_row(0));
        assert_eq!(list.rows(), &[filled("頭獎", "1")]);
    }

    #[test]
    fn test_add_appends_cleared_row() {
        let mut list = PrizeRowList::new(vec![filled("頭獎", "1"), filled("二獎", "3")]);
        let index = list.add_row();
        assert_eq!(index, 2);
        assert_eq!(list.rows()[2], PrizeRow::default());
        assert_eq!(list.rows()[0], filled("頭獎", "1"));
        assert!(list.can_remove());
    }

    #[test]
    fn test_remove_toggles_visibility() {
        let mut list = PrizeRowList::new(vec![filled("頭獎", "1"), filled("二獎", "3")]);
        assert!(list.can_remove());
        assert!(list.remove_row(0));
        assert_eq!(list.rows(), &[filled("二獎", "3")]);
        assert!(!list.can_remove());
        assert!(!list.remove_row(5));
    }

    #[test]
    fn test_validate_reports_bad_row() {
        let mut list = PrizeRowList::from_prizes(&[PrizeSlice {
            name: "頭獎".to_string(),
            probability: 2.5,
        }]);
        assert_eq!(list.rows()[0].probability, "2.5");
        list.add_row();
        list.set_probability(1, "abc".to_string());
        assert_eq!(list.validate().unwrap_err().0, 1);
        list.set_probability(1, "".to_string());
        assert!(list.validate().is_ok());
    }
}

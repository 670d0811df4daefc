// src/grid/row.rs

/// A grid row. The header is a distinct variant rather than a flag so that
/// code touching row beans has to acknowledge the header case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    Header,
    Data(T),
}

impl<T> Row<T> {
    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Row::Header => None,
            Row::Data(bean) => Some(bean),
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Row::Header => None,
            Row::Data(bean) => Some(bean),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Row::Header => None,
            Row::Data(bean) => Some(bean),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_rows_carry_no_bean() {
        let row: Row<String> = Row::Header;
        assert!(row.is_header());
        assert!(row.data().is_none());
        assert!(row.into_data().is_none());
    }

    #[test]
    fn data_rows_expose_their_bean() {
        let mut row = Row::Data("sample".to_string());
        assert!(!row.is_header());
        assert_eq!(row.data().map(String::as_str), Some("sample"));
        if let Some(bean) = row.data_mut() {
            bean.push_str("-1");
        }
        assert_eq!(row.into_data().as_deref(), Some("sample-1"));
    }
}

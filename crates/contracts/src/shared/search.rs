//! Поиск по спискам
//!
//! Records expose the fields a free-text query is matched against; the list
//! screens recompute [`filter_list`] on every keystroke.

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Text fields matched case-insensitively.
    fn search_fields(&self) -> Vec<&str>;

    /// Numeric identifier matched by its decimal form.
    fn search_id(&self) -> Option<i64> {
        None
    }

    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
            || self
                .search_id()
                .map(|id| id.to_string().contains(filter))
                .unwrap_or(false)
    }
}

/// Подмножество записей, подходящих под запрос; порядок сохраняется.
/// Пустой запрос возвращает список без изменений.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: &'static str,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn search_id(&self) -> Option<i64> {
            Some(self.id)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, name: "Widget" },
            Item { id: 2, name: "Gadget" },
        ]
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(filter_list(&items(), "wid"), vec![Item { id: 1, name: "Widget" }]);
        assert_eq!(filter_list(&items(), "GADG"), vec![Item { id: 2, name: "Gadget" }]);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        assert_eq!(filter_list(&items(), ""), items());
    }

    #[test]
    fn id_matches_by_decimal_form() {
        let list = vec![
            Item { id: 12, name: "a" },
            Item { id: 31, name: "b" },
            Item { id: 45, name: "c" },
        ];
        let ids: Vec<i64> = filter_list(&list, "1").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![12, 31]);
    }

    #[test]
    fn no_match_gives_empty() {
        assert!(filter_list(&items(), "sprocket").is_empty());
    }
}

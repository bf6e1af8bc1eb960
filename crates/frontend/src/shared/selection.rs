use std::collections::HashSet;
use std::hash::Hash;

/// Множественный выбор строк таблицы по стабильному ключу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

/// Состояние чекбокса "выбрать все"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl<K: Eq + Hash> Selection<K> {
    pub fn select_all<T>(items: &[T], key: impl Fn(&T) -> K) -> Self {
        Self {
            keys: items.iter().map(key).collect(),
        }
    }

    pub fn clear() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn checkbox_state(&self, total: usize) -> CheckboxState {
        if total == 0 || self.keys.is_empty() {
            CheckboxState::Unchecked
        } else if self.keys.len() >= total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_and_clear() {
        let rows = vec![(0usize, "Max"), (1, "Max"), (2, "Ines")];
        let selection = Selection::select_all(&rows, |r| r.0);
        assert_eq!(selection.len(), 3);
        assert!(selection.is_selected(&1));
        assert!(!selection.is_selected(&3));
        assert_eq!(selection.checkbox_state(rows.len()), CheckboxState::Checked);

        let cleared = Selection::<usize>::clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.checkbox_state(rows.len()), CheckboxState::Unchecked);
    }

    #[test]
    fn test_partial_selection_is_indeterminate() {
        let selection = Selection::select_all(&[7usize], |k| *k);
        assert_eq!(selection.checkbox_state(2), CheckboxState::Indeterminate);
    }

    #[test]
    fn test_empty_table_is_unchecked() {
        let selection = Selection::select_all(&[] as &[usize], |k| *k);
        assert_eq!(selection.checkbox_state(0), CheckboxState::Unchecked);
    }
}

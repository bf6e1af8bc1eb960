/// Универсальные утилиты для работы со списками (сортировка, индикаторы заголовков)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Идентификатор сортируемой колонки
    type Field: Copy + Eq;

    /// Сравнивает два объекта по указанному полю (по возрастанию)
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Применяет направление к результату базового компаратора
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Текущая сортировка списка. Заменяется целиком при каждом клике по заголовку.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Повторный клик по активной колонке по возрастанию переключает на убывание,
    /// любой другой клик даёт сортировку по возрастанию по выбранной колонке.
    pub fn on_header_click(&self, field: F) -> Self {
        let is_asc = self.field == field && self.direction == SortDirection::Ascending;
        Self {
            field,
            direction: if is_asc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }

    pub fn is_active(&self, field: F) -> bool {
        self.field == field
    }
}

/// Стабильная сортировка: элементы с равными значениями поля сохраняют
/// исходный порядок при любом направлении.
///
/// Каждый элемент помечается исходным индексом, который служит последним
/// критерием сравнения, поэтому результат не зависит от стабильности `sort`.
pub fn sort_list<T: Sortable + Clone>(items: &[T], sort: &SortState<T::Field>) -> Vec<T> {
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_unstable_by(|(index_a, a), (index_b, b)| {
        sort.direction
            .apply(a.compare_by_field(b, sort.field))
            .then_with(|| index_a.cmp(index_b))
    });
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(active: bool, direction: SortDirection) -> &'static str {
    match (active, direction) {
        (true, SortDirection::Ascending) => " ▲",
        (true, SortDirection::Descending) => " ▼",
        (false, _) => " ⇅",
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(active: bool) -> &'static str {
    if active {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// Текст для скринридеров на активной колонке
pub fn sort_announcement(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "sorted ascending",
        SortDirection::Descending => "sorted descending",
    }
}

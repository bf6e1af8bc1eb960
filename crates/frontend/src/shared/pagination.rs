//! Клиентская пагинация: окно видимых строк и подпись пейджера

/// Номер страницы (с нуля) и её размер
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
}

impl PageState {
    pub fn new(size: usize) -> Self {
        Self { index: 0, size }
    }

    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Смена размера всегда возвращает на первую страницу
    pub fn with_size(self, size: usize) -> Self {
        Self { index: 0, size }
    }

    pub fn total_pages(&self, count: usize) -> usize {
        if self.size == 0 {
            return 1;
        }
        count.div_ceil(self.size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.index + 1 < self.total_pages(count)
    }
}

/// Видимая часть списка и количество строк-заполнителей
#[derive(Debug, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub visible: &'a [T],
    pub padding: usize,
}

/// Вырезает страницу `index` размера `size`.
///
/// Первая страница никогда не дополняется пустыми строками; на остальных
/// заполнитель сохраняет высоту таблицы постоянной.
pub fn window<T>(rows: &[T], index: usize, size: usize) -> PageWindow<'_, T> {
    let len = rows.len();
    let start = index.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);

    let padding = if index > 0 && len > 0 {
        index
            .saturating_add(1)
            .saturating_mul(size)
            .saturating_sub(len)
    } else {
        0
    };

    PageWindow {
        visible: &rows[start..end],
        padding,
    }
}

/// Подпись вида `11–20 of 42`
pub fn displayed_rows_label(count: usize, index: usize, size: usize) -> String {
    let from = if count == 0 {
        0
    } else {
        index.saturating_mul(size) + 1
    };
    let to = count.min(index.saturating_add(1).saturating_mul(size));
    format!("{}–{} of {}", from, to, count)
}

pub const ROWS_PER_PAGE_LABEL: &str = "Rows per page:";

/// Видимые тексты пейджера по порядку: подпись, текущий размер, диапазон строк.
/// Варианты размера страницы в текст не входят.
pub fn pager_text_parts(count: usize, index: usize, size: usize) -> [String; 3] {
    [
        ROWS_PER_PAGE_LABEL.to_string(),
        size.to_string(),
        displayed_rows_label(count, index, size),
    ]
}

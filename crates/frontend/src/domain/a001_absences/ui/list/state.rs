use crate::domain::a001_absences::projection::{AbsenceColumn, AbsenceRow};
use crate::shared::list_utils::SortState;
use crate::shared::pagination::PageState;
use crate::shared::selection::Selection;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AbsencesListState {
    // Сортировка
    pub sort: SortState<AbsenceColumn>,

    // Клиентская пагинация
    pub page: PageState,

    // Множественный выбор (по стабильному ключу строки)
    pub selection: Selection<usize>,

    // Индикатор загрузки, гаснет один раз
    pub is_loading: bool,

    // Компактные строки
    pub dense: bool,

    // Последняя ошибка выгрузки календаря
    pub export_error: Option<String>,
}

impl AbsencesListState {
    pub fn new(sort: SortState<AbsenceColumn>, page_size: usize, is_loading: bool) -> Self {
        Self {
            sort,
            page: PageState::new(page_size),
            selection: Selection::default(),
            is_loading,
            dense: false,
            export_error: None,
        }
    }

    pub fn request_sort(&mut self, column: AbsenceColumn) {
        self.sort = self.sort.on_header_click(column);
    }

    pub fn go_to_page(&mut self, index: usize) {
        self.page = self.page.with_index(index);
    }

    pub fn change_page_size(&mut self, size: usize) {
        self.page = self.page.with_size(size);
    }

    pub fn toggle_all(&mut self, check_all: bool, rows: &[AbsenceRow]) {
        self.selection = if check_all {
            Selection::select_all(rows, |row| row.key)
        } else {
            Selection::clear()
        };
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    /// Высота одной строки-заполнителя в пикселях
    pub fn padding_row_height(&self) -> usize {
        if self.dense {
            33
        } else {
            53
        }
    }
}

pub fn create_state(initial: AbsencesListState) -> RwSignal<AbsencesListState> {
    RwSignal::new(initial)
}

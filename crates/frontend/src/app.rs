use crate::domain::a001_absences::projection::{project_rows, AbsenceColumn, AbsenceRow};
use crate::domain::a001_absences::ui::list::AbsencesListState;
use crate::domain::a001_absences::ui::AbsencesList;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::data::fixtures::load_dataset;
use crate::shared::list_utils::{SortDirection, SortState};
use anyhow::anyhow;
use leptos::prelude::*;

/// Всё, что нужно таблице, собранное один раз при старте
pub struct AbsencesBootstrap {
    pub config: AppConfig,
    pub rows: Vec<AbsenceRow>,
    pub initial_state: AbsencesListState,
}

/// Явный шаг инициализации: конфигурация, выгрузки, проекция строк
pub fn bootstrap() -> anyhow::Result<AbsencesBootstrap> {
    let config = load_config()?;
    let dataset = load_dataset()?;
    let rows = project_rows(&dataset.members, &dataset.absences);

    let field = AbsenceColumn::from_id(&config.table.default_sort_field).ok_or_else(|| {
        anyhow!(
            "Unknown default sort field: {}",
            config.table.default_sort_field
        )
    })?;
    let sort = SortState::new(
        field,
        SortDirection::from_ascending(config.table.default_sort_ascending),
    );
    let initial_state =
        AbsencesListState::new(sort, config.table.default_page_size, config.table.loading_delay_ms > 0);

    Ok(AbsencesBootstrap {
        config,
        rows,
        initial_state,
    })
}

#[component]
pub fn App() -> impl IntoView {
    let content = match bootstrap() {
        Ok(boot) => view! {
            <AbsencesList
                rows=boot.rows
                initial_state=boot.initial_state
                table_config=boot.config.table
                export_config=boot.config.export
            />
        }
        .into_any(),
        Err(e) => {
            log::error!("Failed to initialise absences table: {:#}", e);
            view! {
                <div class="alert alert--error" role="alert">
                    {format!("Failed to load absences: {:#}", e)}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <main class="absences-page">
            <div style="width: 100%;">{content}</div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;
    use crate::shared::pagination::{displayed_rows_label, window};

    #[test]
    fn test_bootstrap_projects_bundled_rows() {
        let boot = bootstrap().unwrap();
        assert_eq!(boot.rows.len(), 42);
        assert_eq!(boot.initial_state.sort.field, AbsenceColumn::Type);
        assert_eq!(boot.initial_state.page.size, 10);
        assert!(boot.initial_state.is_loading);
    }

    #[test]
    fn test_second_page_of_bundled_rows() {
        let boot = bootstrap().unwrap();
        let sorted = sort_list(&boot.rows, &boot.initial_state.sort);
        let w = window(&sorted, 1, 10);
        assert_eq!(w.visible.len(), 10);
        assert_eq!(displayed_rows_label(sorted.len(), 1, 10), "11–20 of 42");
    }

    #[test]
    fn test_bundled_rows_degrade_gracefully() {
        let boot = bootstrap().unwrap();
        // Одно отсутствие ссылается на несуществующего участника
        assert!(boot.rows.iter().any(|r| r.name.is_empty()));
        assert!(boot.rows.iter().all(|r| !r.member_note.is_empty()));
    }
}

use crate::models::{DataFormat, EditorMode};

use super::Action;

/// The three root-level fields the top reducer owns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TopState {
    pub query_text: String,
    pub data_format: Option<DataFormat>,
    pub editor_mode: Option<EditorMode>,
}

pub(crate) fn reduce(state: TopState, action: &Action) -> TopState {
    match action {
        Action::SetDataFormat(data_format) => TopState {
            data_format: Some(*data_format),
            ..state
        },
        Action::SetEditorMode(editor_mode) => TopState {
            editor_mode: Some(*editor_mode),
            ..state
        },
        Action::SetQueryText(query_text) => TopState {
            query_text: query_text.clone(),
            ..state
        },
        _ => state,
    }
}

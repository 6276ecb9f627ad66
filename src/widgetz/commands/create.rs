use crate::commands::{stored_id, CmdMessage, CmdResult, WidgetPaths};
use crate::error::Result;
use crate::model::{Widget, WidgetDraft};
use crate::store::{DataStore, SaveCondition};
use crate::versioning::next_version;

pub fn run<S: DataStore>(store: &S, paths: &WidgetPaths, draft: WidgetDraft) -> Result<CmdResult> {
    let mut result = CmdResult::created();
    result.add_message(CmdMessage::info(format!(
        "Received widget: name: {}, description: {}",
        draft.name, draft.description
    )));

    let mut widget = Widget::from_draft(draft);
    widget.version = Some(next_version(None));
    let saved = store.save_widget(widget, SaveCondition::Unconditional)?;
    let id = stored_id(&saved)?;

    result.add_message(CmdMessage::success(format!("Widget created ({})", id)));
    let location = paths.widget(id)?;
    Ok(result.with_widget(saved).with_location(location))
}

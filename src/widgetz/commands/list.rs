use crate::commands::{CmdResult, WidgetPaths};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, paths: &WidgetPaths) -> Result<CmdResult> {
    let widgets = store.list_widgets()?;
    let location = paths.collection()?;

    Ok(CmdResult::default()
        .with_widgets(widgets)
        .with_location(location))
}

use crate::commands::{stored_id, CmdResult, WidgetPaths};
use crate::error::{Result, WidgetzError};
use crate::model::{Lookup, WidgetId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, paths: &WidgetPaths, id: WidgetId) -> Result<CmdResult> {
    let widget = match store.get_widget(id)? {
        Lookup::Found(widget) => widget,
        Lookup::Absent => return Err(WidgetzError::NotFound(id)),
    };
    let location = paths.widget(stored_id(&widget)?)?;

    Ok(CmdResult::default()
        .with_widget(widget)
        .with_location(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_widget_with_version_and_location() {
        let store = StoreFixture::new().with_versioned_widget("Widget Name", 2).store;
        let result = run(&store, &WidgetPaths::default(), 1).unwrap();

        assert_eq!(result.version, Some(2));
        assert_eq!(result.location.as_deref(), Some("/widget/1"));
        assert_eq!(result.widget().unwrap().name, "Widget Name");
    }

    #[test]
    fn missing_widget_is_not_found() {
        let store = StoreFixture::new().store;
        let err = run(&store, &WidgetPaths::default(), 1).unwrap_err();
        assert!(matches!(err, WidgetzError::NotFound(1)));
    }
}

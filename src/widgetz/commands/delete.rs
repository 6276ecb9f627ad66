use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::WidgetId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: WidgetId) -> Result<CmdResult> {
    store.delete_widget(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Widget deleted ({})", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Body;
    use crate::model::Lookup;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_widget() {
        let store = StoreFixture::new().with_widgets(2).store;
        let result = run(&store, 1).unwrap();

        assert_eq!(result.body, Body::Empty);
        assert_eq!(store.get_widget(1).unwrap(), Lookup::Absent);
        assert!(store.get_widget(2).unwrap().is_found());
    }

    #[test]
    fn deleting_missing_widget_succeeds() {
        let store = StoreFixture::new().store;
        assert!(run(&store, 12).is_ok());
        assert!(run(&store, 12).is_ok());
    }
}

use crate::commands::{CmdMessage, CmdResult, WidgetPaths};
use crate::error::{Result, WidgetzError};
use crate::model::{Lookup, Widget, WidgetDraft, WidgetId};
use crate::store::{DataStore, SaveCondition};
use crate::versioning::{next_version, IfMatch};

/// Replaces a widget's fields if the caller's token matches the stored version.
///
/// Lookup comes first: an unknown id is `NotFound` no matter what token was
/// sent. The new version is derived from the stored one, and the write is
/// conditioned on that stored version so a competing writer between the read
/// and the write surfaces as `Conflict` instead of being overwritten.
pub fn run<S: DataStore>(
    store: &S,
    paths: &WidgetPaths,
    id: WidgetId,
    draft: WidgetDraft,
    if_match: &IfMatch,
) -> Result<CmdResult> {
    let existing = match store.get_widget(id)? {
        Lookup::Found(widget) => widget,
        Lookup::Absent => return Err(WidgetzError::NotFound(id)),
    };
    let current = existing.version.unwrap_or(0);
    if_match.check(current)?;

    let mut widget = Widget::from_draft(draft);
    widget.id = Some(id);
    widget.version = Some(next_version(existing.version));

    let saved = store.save_widget(widget, SaveCondition::VersionIs(current))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Widget updated ({}): version {} -> {}",
        id,
        current,
        saved.version.unwrap_or(0)
    )));
    let location = paths.widget(id)?;
    Ok(result.with_widget(saved).with_location(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete, get};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn paths() -> WidgetPaths {
        WidgetPaths::default()
    }

    #[test]
    fn matching_token_bumps_version() {
        let store = StoreFixture::new().with_versioned_widget("W", 2).store;
        let result = run(
            &store,
            &paths(),
            1,
            WidgetDraft::new("New Widget", "This is my widget"),
            &IfMatch::strict(Some("2")),
        )
        .unwrap();

        assert_eq!(result.version, Some(3));
        assert_eq!(result.location.as_deref(), Some("/widget/1"));
        let widget = result.widget().unwrap();
        assert_eq!(widget.id, Some(1));
        assert_eq!(widget.name, "New Widget");
        assert_eq!(widget.description, "This is my widget");
    }

    #[test]
    fn stale_token_conflicts_without_mutation() {
        let store = StoreFixture::new().with_versioned_widget("W", 2).store;
        for token in ["\"1\"", "\"3\"", "0"] {
            let err = run(
                &store,
                &paths(),
                1,
                WidgetDraft::new("X", ""),
                &IfMatch::strict(Some(token)),
            )
            .unwrap_err();
            assert!(matches!(err, WidgetzError::Conflict { actual: 2, .. }));
        }

        let stored = store.get_widget(1).unwrap().found().unwrap();
        assert_eq!(stored.version, Some(2));
        assert_eq!(stored.name, "W");
    }

    #[test]
    fn unknown_id_is_not_found_for_any_token() {
        let store = StoreFixture::new().with_versioned_widget("W", 2).store;
        let tokens = [
            IfMatch::strict(Some("2")),
            IfMatch::strict(Some("garbage")),
            IfMatch::strict(None::<&str>),
            IfMatch::loose(Some("2")),
        ];
        for token in &tokens {
            let err = run(&store, &paths(), 3, WidgetDraft::default(), token).unwrap_err();
            assert!(matches!(err, WidgetzError::NotFound(3)));
        }
    }

    #[test]
    fn version_comes_from_store_not_payload() {
        let store = StoreFixture::new().with_versioned_widget("W", 5).store;
        let body: WidgetDraft =
            serde_json::from_str(r#"{"name": "N", "description": "D", "version": 100}"#).unwrap();
        let result = run(&store, &paths(), 1, body, &IfMatch::strict(Some("\"5\""))).unwrap();
        assert_eq!(result.version, Some(6));
    }

    #[test]
    fn missing_token_is_rejected_for_existing_widget() {
        let store = StoreFixture::new().with_versioned_widget("W", 1).store;
        let err = run(
            &store,
            &paths(),
            1,
            WidgetDraft::default(),
            &IfMatch::strict(None::<&str>),
        )
        .unwrap_err();
        assert!(matches!(err, WidgetzError::MissingPrecondition));
    }

    #[test]
    fn loose_mode_only_accepts_bare_decimal() {
        let store = StoreFixture::new().with_versioned_widget("W", 2).store;
        let err = run(
            &store,
            &paths(),
            1,
            WidgetDraft::new("A", ""),
            &IfMatch::loose(Some("\"2\"")),
        )
        .unwrap_err();
        assert!(matches!(err, WidgetzError::Conflict { .. }));

        let result = run(
            &store,
            &paths(),
            1,
            WidgetDraft::new("A", ""),
            &IfMatch::loose(Some("2")),
        )
        .unwrap();
        assert_eq!(result.version, Some(3));
    }

    #[test]
    fn create_update_delete_lifecycle() {
        let store = InMemoryStore::new();
        let created = create::run(
            &store,
            &paths(),
            WidgetDraft::new("Widget Name", "Description"),
        )
        .unwrap();
        let id = created.widget().unwrap().id.unwrap();
        assert_eq!(created.version, Some(1));

        let updated = run(
            &store,
            &paths(),
            id,
            WidgetDraft::new("X", ""),
            &IfMatch::strict(Some("\"1\"")),
        )
        .unwrap();
        assert_eq!(updated.version, Some(2));

        let stale = run(
            &store,
            &paths(),
            id,
            WidgetDraft::new("Y", ""),
            &IfMatch::strict(Some("\"1\"")),
        )
        .unwrap_err();
        assert!(matches!(stale, WidgetzError::Conflict { actual: 2, .. }));
        assert_eq!(get::run(&store, &paths(), id).unwrap().version, Some(2));

        delete::run(&store, id).unwrap();
        assert!(matches!(
            get::run(&store, &paths(), id),
            Err(WidgetzError::NotFound(_))
        ));
    }
}

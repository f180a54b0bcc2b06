/// Faults raised by widget interaction handlers.
///
/// These are programming/integration errors, not runtime conditions to
/// recover from: a handler ran while a collaborator it depends on was never
/// bound. Handlers return the fault immediately instead of silently
/// no-op-ing, since continuing would leave the accessibility surface
/// inconsistent and the inconsistency would be undetectable.
///
/// Benign conditions are deliberately *not* represented here: an empty
/// option set degrades the widget to an inert presentation, unrecognized
/// keys are left unhandled, and interaction while disabled is ignored.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A required collaborator (label, trigger, listbox, or the option
    /// collection) was not bound at the time an interaction handler ran.
    #[error("combobox part not bound: {0} (was attach() called?)")]
    MissingPart(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_part_names_the_part() {
        let err = WidgetError::MissingPart("listbox");
        assert!(err.to_string().contains("listbox"));
    }
}

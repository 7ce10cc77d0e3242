//! View controller switching between the trip form and the checklist
//!
//! | from   | action   | to     |
//! |--------|----------|--------|
//! | `Form` | `submit` | `List` |
//! | `List` | `back`   | `Form` |
//!
//! Going back discards the generated list and its checked state; the list
//! view can only be re-entered by submitting the form again.

use tracing::info;

use crate::checklist::Checklist;
use crate::config::TripConfig;
use crate::engine::PackingEngine;
use crate::form::TripForm;
use crate::models::TripRequest;
use crate::{PackwiseError, Result};

#[derive(Debug, Clone, Default)]
pub enum View {
    #[default]
    Form,
    List {
        request: TripRequest,
        checklist: Checklist,
    },
}

impl View {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            View::Form => "form",
            View::List { .. } => "list",
        }
    }
}

pub struct ViewController<'a> {
    engine: PackingEngine<'a>,
    limits: TripConfig,
    view: View,
}

impl<'a> ViewController<'a> {
    #[must_use]
    pub fn new(engine: PackingEngine<'a>, limits: TripConfig) -> Self {
        Self {
            engine,
            limits,
            view: View::Form,
        }
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Submit the trip form, generating a fresh checklist.
    /// A form that fails validation leaves the controller on the form.
    pub fn submit(&mut self, form: &TripForm) -> Result<&mut Checklist> {
        if !matches!(self.view, View::Form) {
            return Err(PackwiseError::InvalidTransition {
                action: "submit the form",
                view: self.view.name(),
            });
        }

        let request = form.submit(&self.limits)?;
        let items = self.engine.generate(&request);
        info!(
            "Generated {} items for {} ({} days)",
            items.len(),
            request.destination,
            request.duration_days
        );
        let checklist = Checklist::new((&request).into(), items);
        self.view = View::List { request, checklist };

        self.checklist_mut()
            .ok_or_else(|| PackwiseError::general("list view lost after submit"))
    }

    /// Return to the form, discarding the current list
    pub fn back(&mut self) -> Result<()> {
        match self.view {
            View::List { .. } => {
                self.view = View::Form;
                Ok(())
            }
            View::Form => Err(PackwiseError::InvalidTransition {
                action: "go back",
                view: "form",
            }),
        }
    }

    /// The checklist while in the list view
    pub fn checklist_mut(&mut self) -> Option<&mut Checklist> {
        match &mut self.view {
            View::List { checklist, .. } => Some(checklist),
            View::Form => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ItemId;

    fn controller() -> ViewController<'static> {
        ViewController::new(PackingEngine::new(Catalog::builtin()), TripConfig::default())
    }

    fn desert_form() -> TripForm {
        TripForm {
            destination: "Desert".to_string(),
            duration: 4,
            ..TripForm::default()
        }
    }

    #[test]
    fn test_starts_on_form() {
        let mut controller = controller();
        assert!(matches!(controller.view(), View::Form));
        assert!(controller.checklist_mut().is_none());
    }

    #[test]
    fn test_submit_moves_to_list() {
        let mut controller = controller();
        let checklist = controller.submit(&desert_form()).unwrap();
        assert_eq!(checklist.summary().destination, "Desert");
        assert_eq!(controller.view().name(), "list");
        match controller.view() {
            View::List { request, .. } => assert_eq!(request.duration_days, 4),
            View::Form => panic!("expected list view"),
        }
    }

    #[test]
    fn test_invalid_form_stays_on_form() {
        let mut controller = controller();
        let err = controller.submit(&TripForm::new()).unwrap_err();
        assert!(err.is_user_error());
        assert!(matches!(controller.view(), View::Form));
    }

    #[test]
    fn test_back_discards_checked_state() {
        let mut controller = controller();
        controller
            .submit(&desert_form())
            .unwrap()
            .set_checked(ItemId::Hat, true);
        assert!(controller.checklist_mut().unwrap().is_checked(ItemId::Hat));

        controller.back().unwrap();
        assert!(matches!(controller.view(), View::Form));

        let checklist = controller.submit(&desert_form()).unwrap();
        assert!(!checklist.is_checked(ItemId::Hat));
    }

    #[test]
    fn test_rejected_transitions() {
        let mut controller = controller();
        assert!(matches!(
            controller.back(),
            Err(PackwiseError::InvalidTransition { .. })
        ));

        controller.submit(&desert_form()).unwrap();
        let err = controller.submit(&desert_form()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot submit the form from the list view");
    }
}

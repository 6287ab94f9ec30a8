use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use validator::Validate;

use crate::api::{ApiError, FormTransport, RouletteClient};
use crate::constants::*;
use crate::shared_roulette::{ApiAck, DeleteActivityRequest, NewActivityRequest};
use crate::view::Notifier;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// A draw is running; archiving is ignored until it finishes.
    #[error("a draw is in progress")]
    Busy,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Transport(String),
    #[error("confirmation declined")]
    ConfirmationDeclined,
}

impl ActivityError {
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ActivityError::Busy | ActivityError::ConfirmationDeclined => None,
            ActivityError::Validation(msg)
            | ActivityError::Request(msg)
            | ActivityError::Transport(msg) => Some(msg.as_str()),
        }
    }
}

pub fn prepare_new_activity(
    activity_name: &str,
    config_id: Option<&str>,
) -> Result<NewActivityRequest, ActivityError> {
    let request = NewActivityRequest::new(activity_name, config_id);
    if let Err(errors) = request.validate() {
        let message = if errors.field_errors().contains_key("activity_name") {
            ACTIVITY_NAME_REQUIRED_ERROR
        } else {
            CONFIG_MISSING_ERROR
        };
        return Err(ActivityError::Validation(message.to_string()));
    }
    Ok(request)
}

/// Maps an activity endpoint reply onto success or a user-facing error.
pub fn interpret_ack(
    outcome: Result<ApiAck, ApiError>,
    failed_message: &str,
    network_message: &str,
) -> Result<(), ActivityError> {
    match outcome {
        Ok(ack) if ack.success => Ok(()),
        Ok(ack) => Err(ActivityError::Request(
            ack.message
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| failed_message.to_string()),
        )),
        Err(e) => {
            log::warn!("Activity request failed: {}", e);
            Err(ActivityError::Transport(network_message.to_string()))
        }
    }
}

/// Archived activities listed on the admin page, with delete support.
pub struct ActivityBoard<T: ?Sized, N: ?Sized> {
    client: RouletteClient<T>,
    notifier: Rc<N>,
    activities: RefCell<Vec<String>>,
}

impl<T, N> ActivityBoard<T, N>
where
    T: FormTransport + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(client: RouletteClient<T>, notifier: Rc<N>, activities: Vec<String>) -> Self {
        Self {
            client,
            notifier,
            activities: RefCell::new(activities),
        }
    }

    pub fn activities(&self) -> Vec<String> {
        self.activities.borrow().clone()
    }

    /// Confirms, asks the server to delete, and drops the entry on success.
    /// Failures are shown to the user and leave the list untouched.
    pub async fn delete(&self, activity_name: &str) -> Result<(), ActivityError> {
        if !self
            .notifier
            .confirm(&delete_activity_confirm_message(activity_name))
        {
            return Err(ActivityError::ConfirmationDeclined);
        }

        let request = DeleteActivityRequest {
            activity_name: activity_name.trim().to_string(),
        };
        let outcome = interpret_ack(
            self.client.delete_activity(&request).await,
            DELETE_ACTIVITY_FAILED_ERROR,
            DELETE_ACTIVITY_NETWORK_ERROR,
        );

        match outcome {
            Ok(()) => {
                self.activities
                    .borrow_mut()
                    .retain(|name| name.trim() != request.activity_name);
                log::info!("Deleted activity {}", request.activity_name);
                Ok(())
            }
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.notifier.alert(message);
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct ScriptedTransport {
        reply: Result<String, ApiError>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl FormTransport for ScriptedTransport {
        async fn post_form(&self, _path: &str, _body: String) -> Result<String, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct Dialogs {
        accept: bool,
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for Dialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.accept
        }

        fn navigate(&self, _url: &str) {}
    }

    fn board(
        reply: Result<String, ApiError>,
        accept: bool,
    ) -> (
        Rc<ScriptedTransport>,
        Rc<Dialogs>,
        ActivityBoard<ScriptedTransport, Dialogs>,
    ) {
        let transport = Rc::new(ScriptedTransport {
            reply,
            calls: Cell::new(0),
        });
        let dialogs = Rc::new(Dialogs {
            accept,
            ..Dialogs::default()
        });
        let board = ActivityBoard::new(
            RouletteClient::new(transport.clone()),
            dialogs.clone(),
            vec!["尾牙".to_string(), "春酒".to_string()],
        );
        (transport, dialogs, board)
    }

    #[test]
    fn test_declined_confirmation_is_silent() {
        let (transport, dialogs, board) = board(Ok(r#"{"success": true}"#.to_string()), false);
        let err = block_on(board.delete("尾牙")).unwrap_err();
        assert_eq!(err, ActivityError::ConfirmationDeclined);
        assert_eq!(transport.calls.get(), 0);
        assert!(dialogs.alerts.borrow().is_empty());
        assert_eq!(board.activities().len(), 2);
    }

    #[test]
    fn test_confirmed_delete_removes_entry() {
        let (transport, _, board) = board(Ok(r#"{"success": true}"#.to_string()), true);
        block_on(board.delete("尾牙")).unwrap();
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(board.activities(), vec!["春酒".to_string()]);
    }

    #[test]
    fn test_delete_matches_trimmed_name() {
        let (transport, _, board) = board(Ok(r#"{"success": true}"#.to_string()), true);
        block_on(board.delete("  尾牙 ")).unwrap();
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(board.activities(), vec!["春酒".to_string()]);
    }

    #[test]
    fn test_server_refusal_keeps_entry_and_alerts() {
        let (_, dialogs, board) = board(
            Ok(r#"{"success": false, "message": "找不到活動"}"#.to_string()),
            true,
        );
        let err = block_on(board.delete("尾牙")).unwrap_err();
        assert_eq!(err, ActivityError::Request("找不到活動".to_string()));
        assert_eq!(board.activities().len(), 2);
        assert_eq!(*dialogs.alerts.borrow(), vec!["找不到活動".to_string()]);
    }

    #[test]
    fn test_transport_failure_alerts_generic_message() {
        let (_, dialogs, board) = board(Err(ApiError::Network("offline".to_string())), true);
        block_on(board.delete("春酒")).unwrap_err();
        assert_eq!(
            *dialogs.alerts.borrow(),
            vec![DELETE_ACTIVITY_NETWORK_ERROR.to_string()]
        );
        assert_eq!(board.activities().len(), 2);
    }

    #[test]
    fn test_prepare_new_activity_checks_name_first() {
        assert_eq!(
            prepare_new_activity(" ", None).unwrap_err().user_message(),
            Some(ACTIVITY_NAME_REQUIRED_ERROR)
        );
        assert_eq!(
            prepare_new_activity("春酒", None).unwrap_err().user_message(),
            Some(CONFIG_MISSING_ERROR)
        );
        assert_eq!(
            prepare_new_activity(" 春酒 ", Some("3")).unwrap(),
            NewActivityRequest {
                activity_name: "春酒".to_string(),
                config_id: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_interpret_ack_fallback_message() {
        let err = interpret_ack(Ok(ApiAck::default()), NEW_ACTIVITY_FAILED_ERROR, NEW_ACTIVITY_NETWORK_ERROR)
            .unwrap_err();
        assert_eq!(err.user_message(), Some(NEW_ACTIVITY_FAILED_ERROR));
    }
}

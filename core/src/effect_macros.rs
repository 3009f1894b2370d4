//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```rust,ignore
/// use statekit_core::async_effect;
///
/// async_effect! {
///     let users = source.fetch_users().await;
///     Some(UserListAction::from(users))
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Delay` for scheduling delayed actions
///
/// # Example
///
/// ```rust,ignore
/// use statekit_core::delay;
/// use std::time::Duration;
///
/// delay! {
///     duration: Duration::from_millis(1000),
///     action: UserFormAction::SubmitCompleted { ticket }
/// }
/// ```
#[macro_export]
macro_rules! delay {
    (
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Delay {
            duration: $duration,
            action: ::std::boxed::Box::new($action),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::Effect;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Fetched { rows: usize },
        LatencyElapsed,
    }

    #[tokio::test]
    async fn async_effect_resolves_to_action() {
        let effect = async_effect! {
            Some(TestAction::Fetched { rows: 3 })
        };

        let Effect::Future(fut) = effect else {
            unreachable!("async_effect! must build a Future");
        };
        assert_eq!(fut.await, Some(TestAction::Fetched { rows: 3 }));
    }

    #[test]
    fn delay_macro_boxes_action() {
        let effect = delay! {
            duration: Duration::from_millis(1000),
            action: TestAction::LatencyElapsed
        };

        match effect {
            Effect::Delay { duration, action } => {
                assert_eq!(duration, Duration::from_millis(1000));
                assert_eq!(*action, TestAction::LatencyElapsed);
            },
            other => unreachable!("unexpected effect {other:?}"),
        }
    }
}

use std::{fmt::Display, time::Duration};

/// How long the success or error label stays up before the control resets.
pub const REVERT_DELAY: Duration = Duration::from_millis(3000);

/// State of the submit control of one form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    #[default]
    Default,
    Sending,
    Sent,
    Error,
}

impl ButtonLabel {
    pub fn text(self) -> &'static str {
        match self {
            ButtonLabel::Default => "Send Message",
            ButtonLabel::Sending => "Sending...",
            ButtonLabel::Sent => "Message Sent!",
            ButtonLabel::Error => "Error - Try Again",
        }
    }
}

impl Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ResponseSuccess,
    /// A failure body, a transport error or an elapsed request timeout.
    ResponseFailure,
    RevertElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    DisableControl,
    EnableControl,
    SetLabel(ButtonLabel),
    SendRequest,
    ScheduleRevert(Duration),
    ClearFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ButtonState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: ButtonState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    fn stay(state: ButtonState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }
}

impl ButtonState {
    /// Applies one event. Events that do not belong to the current state leave
    /// it unchanged with no effects; in particular a submit outside `Idle` is
    /// dropped, which is what prevents a second request.
    pub fn transition(self, event: FormEvent) -> Transition {
        use ButtonState::*;
        use FormEvent::*;

        match (self, event) {
            (Idle, Submit) => Transition::to(
                Sending,
                vec![
                    Effect::DisableControl,
                    Effect::SetLabel(ButtonLabel::Sending),
                    Effect::SendRequest,
                ],
            ),
            (Sending, ResponseSuccess) => Transition::to(
                Succeeded,
                vec![
                    Effect::SetLabel(ButtonLabel::Sent),
                    Effect::ScheduleRevert(REVERT_DELAY),
                ],
            ),
            (Sending, ResponseFailure) => Transition::to(
                Failed,
                vec![
                    Effect::SetLabel(ButtonLabel::Error),
                    Effect::ScheduleRevert(REVERT_DELAY),
                ],
            ),
            (Succeeded, RevertElapsed) => Transition::to(
                Idle,
                vec![
                    Effect::ClearFields,
                    Effect::SetLabel(ButtonLabel::Default),
                    Effect::EnableControl,
                ],
            ),
            (Failed, RevertElapsed) => Transition::to(
                Idle,
                vec![
                    Effect::SetLabel(ButtonLabel::Default),
                    Effect::EnableControl,
                ],
            ),
            (state, _) => Transition::stay(state),
        }
    }

    pub fn label(self) -> ButtonLabel {
        match self {
            ButtonState::Idle => ButtonLabel::Default,
            ButtonState::Sending => ButtonLabel::Sending,
            ButtonState::Succeeded => ButtonLabel::Sent,
            ButtonState::Failed => ButtonLabel::Error,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == ButtonState::Idle
    }
}

use knight_paths::{Board, DiagnosticSink, Session, SessionEvent, SessionState};

/// Captures leveled messages for assertions.
#[derive(Default)]
struct RecordingSink {
    infos: Vec<String>,
    errors: Vec<String>,
}

impl DiagnosticSink for RecordingSink {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

#[test]
fn test_valid_query_reaches_done() {
    let mut session = Session::new(Board::new(8));
    let mut sink = RecordingSink::default();
    assert_eq!(session.state(), SessionState::AwaitingStart);
    assert_eq!(session.prompt(), "Start position (e.g. a1): ");

    assert_eq!(session.offer(Some("a1"), &mut sink), SessionEvent::Prompt);
    assert!(matches!(session.state(), SessionState::AwaitingEnd { .. }));
    assert_eq!(session.prompt(), "End position (e.g. h8): ");

    match session.offer(Some("b3"), &mut sink) {
        SessionEvent::Found { paths, .. } => {
            assert_eq!(paths.len(), 1);
            assert_eq!(paths.distance(), Some(1));
        }
        other => panic!("expected Found, got {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Done);
    assert!(sink.infos.iter().any(|m| m == "Finding paths from a1 to b3"));
    assert!(sink.infos.iter().any(|m| m == "Found 1 shortest paths"));
}

#[test]
fn test_invalid_input_reprompts() {
    let mut session = Session::new(Board::new(8));
    let mut sink = RecordingSink::default();

    assert!(matches!(
        session.offer(Some("z9"), &mut sink),
        SessionEvent::Invalid(_)
    ));
    // Still waiting for a start position, and the user was told why.
    assert_eq!(session.state(), SessionState::AwaitingStart);
    assert_eq!(sink.errors.len(), 1);
    assert!(sink.errors[0].contains("z9"));

    assert_eq!(session.offer(Some("a1"), &mut sink), SessionEvent::Prompt);
    assert!(matches!(
        session.offer(Some("not a square"), &mut sink),
        SessionEvent::Invalid(_)
    ));
    assert!(matches!(session.state(), SessionState::AwaitingEnd { .. }));
}

#[test]
fn test_input_is_trimmed() {
    let mut session = Session::new(Board::new(8));
    let mut sink = RecordingSink::default();
    assert_eq!(session.offer(Some("  a1\n"), &mut sink), SessionEvent::Prompt);
}

#[test]
fn test_eof_cancels() {
    let mut session = Session::new(Board::new(8));
    let mut sink = RecordingSink::default();
    assert_eq!(session.offer(Some("a1"), &mut sink), SessionEvent::Prompt);
    assert_eq!(session.offer(None, &mut sink), SessionEvent::Cancelled);
    assert_eq!(session.state(), SessionState::Cancelled);
    // A cancelled session stays cancelled, even across reset.
    session.reset();
    assert_eq!(session.state(), SessionState::Cancelled);
    assert_eq!(session.offer(Some("a1"), &mut sink), SessionEvent::Cancelled);
}

#[test]
fn test_no_path_is_reported_not_fatal() {
    let mut session = Session::new(Board::new(2));
    let mut sink = RecordingSink::default();
    assert_eq!(session.offer(Some("a1"), &mut sink), SessionEvent::Prompt);
    match session.offer(Some("b2"), &mut sink) {
        SessionEvent::NoPath { .. } => {}
        other => panic!("expected NoPath, got {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Done);
    assert!(sink.errors.iter().any(|m| m == "No valid paths found"));

    // The loop can go around again for new input.
    session.reset();
    assert_eq!(session.state(), SessionState::AwaitingStart);
}

#[test]
fn test_done_accepts_next_query_directly() {
    let mut session = Session::new(Board::new(8));
    let mut sink = RecordingSink::default();
    session.offer(Some("a1"), &mut sink);
    assert!(matches!(
        session.offer(Some("b3"), &mut sink),
        SessionEvent::Found { .. }
    ));
    // Without an explicit reset, fresh input starts a new query.
    assert_eq!(session.offer(Some("d4"), &mut sink), SessionEvent::Prompt);
    assert!(matches!(session.state(), SessionState::AwaitingEnd { .. }));
}

//! Integration tests: UI events through the dispatcher and the ordered
//! transport, out to recorded frames.

use trackpad_controller::application::{CommandDispatcher, ControlAction, DispatcherOptions, Outbox};
use trackpad_controller::domain::UiEvent;
use trackpad_controller::infrastructure::transport::mock::RecordingWriter;
use trackpad_controller::infrastructure::transport::stdio::LineWriter;
use trackpad_controller::infrastructure::transport::OrderedTransport;
use trackpad_core::protocol::decode_frame;
use trackpad_core::{Command, ConnectionStatus, MouseButton, TouchPoint};

/// Parses newline-delimited UI events, dispatches them, and pushes the
/// resulting commands through a transport backed by `writer`.
async fn run_session(events: &str, writer: RecordingWriter) -> ConnectionStatus {
    let transport = OrderedTransport::spawn(writer, 8);
    let mut dispatcher = CommandDispatcher::new(Outbox::new(), DispatcherOptions::default());

    for line in events.lines().filter(|l| !l.trim().is_empty()) {
        let event: UiEvent = serde_json::from_str(line).expect("test event must parse");
        dispatcher.handle_event(event);
        let queued: Vec<Command> = dispatcher.sink_mut().drain().collect();
        for command in queued {
            transport.send(command).await.expect("transport accepts commands");
        }
    }

    transport.shutdown().await
}

#[tokio::test]
async fn test_mixed_session_preserves_order_and_sequence() {
    // Arrange
    let events = r#"
{"type":"Touch","phase":"start","points":[{"id":0,"x":100,"y":100}]}
{"type":"Touch","phase":"move","points":[{"id":0,"x":120,"y":100}]}
{"type":"Touch","phase":"move","points":[{"id":0,"x":125,"y":97}]}
{"type":"Touch","phase":"move","points":[{"id":0,"x":130,"y":94}]}
{"type":"Touch","phase":"end","points":[{"id":0,"x":130,"y":94}]}
{"type":"RightClick"}
{"type":"ModifierToggle"}
{"type":"KeyTap","key":"shift"}
{"type":"KeyPress","id":"t"}
{"type":"ModifierToggle"}
{"type":"ToggleScroll"}
{"type":"Touch","phase":"start","points":[{"id":1,"x":0,"y":0}]}
{"type":"Touch","phase":"move","points":[{"id":1,"x":0,"y":-50}]}
{"type":"Touch","phase":"end","points":[{"id":1,"x":0,"y":-50}]}
{"type":"KeyTap","key":"audioplay"}
{"type":"KeyTap","key":"audioplay"}
{"type":"Copy"}
{"type":"Paste"}
"#;
    let writer = RecordingWriter::new();

    // Act
    let final_status = run_session(events, writer.clone()).await;

    // Assert
    let envelopes = writer.envelopes();
    let commands: Vec<Command> = envelopes.iter().map(|e| e.command.clone()).collect();
    assert_eq!(
        commands,
        vec![
            Command::CursorMove { dx: 20, dy: 0 },
            Command::CursorMove { dx: 5, dy: -3 },
            Command::CursorMove { dx: 5, dy: -3 },
            Command::Click { button: MouseButton::Right },
            Command::ComboSend {
                modifier: "ctrl".into(),
                keys: vec!["shift".into(), "t".into()],
            },
            Command::Scroll { dx: 0, dy: -50 },
            Command::key("audioplay"),
            Command::key("audiopause"),
            Command::Copy,
            Command::Paste,
        ]
    );
    let seqs: Vec<u64> = envelopes.iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (0..commands.len() as u64).collect::<Vec<_>>());
    assert_eq!(final_status, ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn test_tap_and_jitter_produce_single_click() {
    // Arrange – the finger wobbles 2 px and lifts
    let events = r#"
{"type":"Touch","phase":"start","points":[{"id":4,"x":300,"y":300,"timestamp_ms":1000}]}
{"type":"Touch","phase":"move","points":[{"id":4,"x":302,"y":299,"timestamp_ms":1016}]}
{"type":"Touch","phase":"end","points":[{"id":4,"x":301,"y":301,"timestamp_ms":1080}]}
"#;
    let writer = RecordingWriter::new();

    // Act
    run_session(events, writer.clone()).await;

    // Assert
    assert_eq!(
        writer.commands(),
        vec![Command::Click {
            button: MouseButton::Left
        }]
    );
}

#[tokio::test]
async fn test_second_finger_does_not_make_cursor_jump() {
    let events = r#"
{"type":"Touch","phase":"start","points":[{"id":0,"x":10,"y":10}]}
{"type":"Touch","phase":"start","points":[{"id":1,"x":900,"y":900}]}
{"type":"Touch","phase":"move","points":[{"id":0,"x":40,"y":10},{"id":1,"x":905,"y":900}]}
{"type":"Touch","phase":"end","points":[{"id":0,"x":40,"y":10}]}
{"type":"Touch","phase":"move","points":[{"id":1,"x":915,"y":910}]}
{"type":"Touch","phase":"end","points":[{"id":1,"x":915,"y":910}]}
"#;
    let writer = RecordingWriter::new();

    run_session(events, writer.clone()).await;

    assert_eq!(
        writer.commands(),
        vec![
            Command::CursorMove { dx: 30, dy: 0 },
            Command::CursorMove { dx: 10, dy: 10 },
        ]
    );
}

#[tokio::test]
async fn test_failed_writer_surfaces_only_as_disconnected_status() {
    // Arrange
    let transport = OrderedTransport::spawn(RecordingWriter::failing_open(), 8);
    let mut status_rx = transport.subscribe();
    let mut dispatcher = CommandDispatcher::new(Outbox::new(), DispatcherOptions::default());

    // Act
    let status = *status_rx
        .wait_for(|s| *s == ConnectionStatus::Disconnected)
        .await
        .expect("status channel open");
    dispatcher.set_connection_status(status);
    dispatcher.handle_event(UiEvent::LeftClick);

    // Assert – the dispatcher still works; the status is just reported
    assert_eq!(dispatcher.connection_status(), ConnectionStatus::Disconnected);
    assert_eq!(dispatcher.status_indicator().label, "Disconnected");
    assert_eq!(dispatcher.sink().len(), 1);
}

#[tokio::test]
async fn test_line_writer_output_decodes_back_to_commands() {
    // Arrange
    let (client, mut server) = tokio::io::duplex(4096);
    let transport = OrderedTransport::spawn(LineWriter::new(client), 8);

    // Act
    transport
        .send(Command::Click {
            button: MouseButton::Left,
        })
        .await
        .unwrap();
    transport.send(Command::key("esc")).await.unwrap();
    transport.shutdown().await;

    let mut output = String::new();
    tokio::io::AsyncReadExt::read_to_string(&mut server, &mut output)
        .await
        .unwrap();

    // Assert
    let decoded: Vec<Command> = output
        .lines()
        .map(|l| decode_frame(l).expect("frame decodes").command)
        .collect();
    assert_eq!(
        decoded,
        vec![
            Command::Click {
                button: MouseButton::Left
            },
            Command::key("esc"),
        ]
    );
}

#[test]
fn test_control_bar_buttons_map_to_dispatchable_events() {
    // Arrange
    let mut dispatcher = CommandDispatcher::new(Vec::new(), DispatcherOptions::default());

    // Act – press every button once, in bar order
    let actions: Vec<ControlAction> = dispatcher
        .control_bar()
        .buttons
        .iter()
        .map(|b| b.action)
        .collect();
    for action in actions {
        dispatcher.handle_event(action.event());
    }

    // Assert – toggles emit nothing; clicks, copy and paste emit once each
    assert_eq!(
        dispatcher.sink(),
        &vec![
            Command::Click { button: MouseButton::Left },
            Command::Click { button: MouseButton::Right },
            Command::Copy,
            Command::Paste,
        ]
    );
    assert!(dispatcher.keyboard_open());
    assert_eq!(dispatcher.control_bar().buttons[0].label, "Scroll");
}

#[test]
fn test_touch_point_helpers_match_wire_shape() {
    let json = serde_json::to_value(TouchPoint::new(3, 7, -2).at(99)).unwrap();
    assert_eq!(json, serde_json::json!({"id": 3, "x": 7, "y": -2, "timestamp_ms": 99}));
}

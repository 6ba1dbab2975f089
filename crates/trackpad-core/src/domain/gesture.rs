//! Gesture classification: raw multi-touch sequences in, intents out.
//!
//! The [`GestureClassifier`] consumes touch-start/move/end events from a
//! rectangular surface and produces at most one [`Intent`] per event:
//!
//! - a [`Intent::CursorDelta`] for primary-finger movement in cursor mode,
//! - a [`Intent::ScrollDelta`] for the same movement in scroll mode,
//! - a [`Intent::Tap`] when a finger goes down and comes back up without
//!   leaving the jitter tolerance radius.
//!
//! # Sessions (for beginners)
//!
//! A *gesture session* spans the time from the first finger touching the
//! surface until the last finger lifts.  Only one session exists at a time.
//! A finger that lands while a session is already running is merged into it
//! instead of starting a new one; otherwise the cursor would jump to wherever
//! the second finger landed.
//!
//! The classifier owns the session as an `Option<GestureSession>`: `Some`
//! while fingers are down, `None` otherwise.
//!
//! # Jitter tolerance
//!
//! A fingertip is not a mouse: it wobbles by a few pixels even when the user
//! means to tap.  While the primary finger stays inside a circle of radius
//! [`GestureConfig::jitter_tolerance_px`] around where it landed, no delta
//! is emitted.  The first move that leaves the circle emits the *whole*
//! displacement from the landing point, so the sum of all deltas always
//! equals the net finger displacement.
//!
//! # Mode
//!
//! Cursor versus scroll is chosen by an external toggle, never inferred from
//! the finger count.  A session captures the mode it started with; toggling
//! while fingers are down only affects the next session.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default jitter tolerance radius in device pixels.
pub const DEFAULT_JITTER_TOLERANCE_PX: i32 = 6;

// ── Raw touch input ───────────────────────────────────────────────────────────

/// One finger's contact with the surface at a point in time.
///
/// Any `i32` position is accepted.  A jump wider than `i32` between two
/// samples is emitted as a clamped delta and the rest follows with the next
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Finger identifier, stable from touch-start to touch-end.
    pub id: u32,
    /// Horizontal position in device pixels.
    pub x: i32,
    /// Vertical position in device pixels.
    pub y: i32,
    /// Milliseconds on the device's monotonic clock.
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl TouchPoint {
    /// Creates a point with a zero timestamp.
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            timestamp_ms: 0,
        }
    }

    /// Returns the same point stamped with `timestamp_ms`.
    pub fn at(self, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            ..self
        }
    }
}

/// Which part of a touch lifecycle an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// One or more fingers touched down.
    Start,
    /// One or more fingers moved.
    Move,
    /// One or more fingers lifted.
    End,
    /// The platform aborted one or more touches (e.g. an OS gesture took over).
    Cancel,
}

/// A raw touch event carrying the fingers that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Fingers that changed in this event (the DOM's `changedTouches`).
    pub points: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn start(points: Vec<TouchPoint>) -> Self {
        Self {
            phase: TouchPhase::Start,
            points,
        }
    }

    pub fn moved(points: Vec<TouchPoint>) -> Self {
        Self {
            phase: TouchPhase::Move,
            points,
        }
    }

    pub fn end(points: Vec<TouchPoint>) -> Self {
        Self {
            phase: TouchPhase::End,
            points,
        }
    }

    pub fn cancel(points: Vec<TouchPoint>) -> Self {
        Self {
            phase: TouchPhase::Cancel,
            points,
        }
    }
}

// ── Classification output ─────────────────────────────────────────────────────

/// Whether primary-finger movement drives the pointer or scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureMode {
    #[default]
    Cursor,
    Scroll,
}

impl GestureMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GestureMode::Cursor => GestureMode::Scroll,
            GestureMode::Scroll => GestureMode::Cursor,
        }
    }
}

/// A classified, semantically meaningful touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the remote pointer by `(dx, dy)` device pixels.
    CursorDelta { dx: i32, dy: i32 },
    /// Scroll the remote view by `(dx, dy)` device pixels.
    ScrollDelta { dx: i32, dy: i32 },
    /// A left-click equivalent.
    Tap,
}

/// Tunables for the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Radius in device pixels inside which primary-finger movement is
    /// treated as jitter rather than motion.
    pub jitter_tolerance_px: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            jitter_tolerance_px: DEFAULT_JITTER_TOLERANCE_PX,
        }
    }
}

impl GestureConfig {
    /// Returns `true` if a displacement of `(dx, dy)` lies outside the
    /// tolerance circle.  The boundary itself counts as inside.
    pub fn exceeds_tolerance(&self, dx: i32, dy: i32) -> bool {
        self.exceeds_tolerance_wide(i64::from(dx), i64::from(dy))
    }

    /// Same as [`exceeds_tolerance`](Self::exceeds_tolerance) for offsets
    /// between two arbitrary `i32` positions, which need 33 bits.
    fn exceeds_tolerance_wide(&self, dx: i64, dy: i64) -> bool {
        let radius = i128::from(self.jitter_tolerance_px.max(0));
        let (dx, dy) = (i128::from(dx), i128::from(dy));
        dx * dx + dy * dy > radius * radius
    }
}

/// Exact offset from `from` to `to`.
fn offset(from: (i32, i32), to: (i32, i32)) -> (i64, i64) {
    (
        i64::from(to.0) - i64::from(from.0),
        i64::from(to.1) - i64::from(from.1),
    )
}

/// Narrows an offset to the `i32` range an [`Intent`] carries.
fn clamp_delta(wide: i64) -> i32 {
    i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
}

// ── Session ───────────────────────────────────────────────────────────────────

/// State for one continuous touch interaction.
#[derive(Debug, Clone)]
pub struct GestureSession {
    mode: GestureMode,
    primary: u32,
    anchor: (i32, i32),
    last_emitted: (i32, i32),
    /// Fingers currently down, in the order they landed.
    fingers: Vec<TouchPoint>,
    /// Still eligible to end as a tap.
    tap_candidate: bool,
    started_at_ms: u64,
}

impl GestureSession {
    fn begin(mode: GestureMode, first: TouchPoint) -> Self {
        Self {
            mode,
            primary: first.id,
            anchor: (first.x, first.y),
            last_emitted: (first.x, first.y),
            fingers: vec![first],
            tap_candidate: true,
            started_at_ms: first.timestamp_ms,
        }
    }

    /// Mode captured when the session started.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Identifier of the finger whose movement is tracked.
    pub fn primary_id(&self) -> u32 {
        self.primary
    }

    /// Where the primary finger landed.
    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    /// Primary-finger position as of the last emitted delta.
    pub fn last_emitted(&self) -> (i32, i32) {
        self.last_emitted
    }

    /// Number of fingers currently down.
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    fn contains(&self, id: u32) -> bool {
        self.fingers.iter().any(|f| f.id == id)
    }

    fn finger_mut(&mut self, id: u32) -> Option<&mut TouchPoint> {
        self.fingers.iter_mut().find(|f| f.id == id)
    }

    fn remove(&mut self, id: u32) -> Option<TouchPoint> {
        let index = self.fingers.iter().position(|f| f.id == id)?;
        Some(self.fingers.remove(index))
    }

    /// Applies a new primary-finger position and returns the resulting delta.
    fn track_primary(&mut self, point: &TouchPoint, config: &GestureConfig) -> Option<Intent> {
        if self.tap_candidate {
            let (ax, ay) = offset(self.anchor, (point.x, point.y));
            if !config.exceeds_tolerance_wide(ax, ay) {
                return None;
            }
            self.tap_candidate = false;
        }

        let (wide_dx, wide_dy) = offset(self.last_emitted, (point.x, point.y));
        let (dx, dy) = (clamp_delta(wide_dx), clamp_delta(wide_dy));
        if dx == 0 && dy == 0 {
            return None;
        }
        if (i64::from(dx), i64::from(dy)) != (wide_dx, wide_dy) {
            trace!("delta ({wide_dx}, {wide_dy}) clamped; remainder carried to the next move");
        }
        // The clamped step lands between the old position and `point`, so it stays in range.
        self.last_emitted = (self.last_emitted.0 + dx, self.last_emitted.1 + dy);

        Some(match self.mode {
            GestureMode::Cursor => Intent::CursorDelta { dx, dy },
            GestureMode::Scroll => Intent::ScrollDelta { dx, dy },
        })
    }

    /// Hands tracking to the earliest remaining finger without moving the cursor.
    fn promote_next_primary(&mut self) {
        if let Some(next) = self.fingers.first() {
            self.primary = next.id;
            self.last_emitted = (next.x, next.y);
        }
        self.tap_candidate = false;
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

/// Turns raw touch events into [`Intent`]s.
///
/// Malformed input (a move or end with no active session, an unknown finger
/// id, a duplicate touch-start) is ignored without error.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    mode: GestureMode,
    session: Option<GestureSession>,
}

impl GestureClassifier {
    /// Creates a classifier in cursor mode.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            mode: GestureMode::Cursor,
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The externally selected mode, applied to the next session.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GestureMode) {
        if self.session.is_some() && mode != self.mode {
            debug!("mode set to {mode:?} mid-gesture; takes effect on next session");
        }
        self.mode = mode;
    }

    /// Flips between cursor and scroll mode and returns the new mode.
    pub fn toggle_mode(&mut self) -> GestureMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// `true` while at least one finger is down.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Feeds one raw event and returns the intent it resolves to, if any.
    pub fn handle(&mut self, event: &TouchEvent) -> Option<Intent> {
        match event.phase {
            TouchPhase::Start => {
                self.touch_start(&event.points);
                None
            }
            TouchPhase::Move => self.touch_move(&event.points),
            TouchPhase::End => self.touch_end(&event.points, true),
            TouchPhase::Cancel => self.touch_end(&event.points, false),
        }
    }

    fn touch_start(&mut self, points: &[TouchPoint]) {
        let mode = self.mode;
        let mut points = points.iter();

        if self.session.is_none() {
            let Some(first) = points.next() else {
                trace!("touch-start without points ignored");
                return;
            };
            debug!(
                "gesture session started: finger {} at ({}, {}) in {mode:?} mode",
                first.id, first.x, first.y
            );
            self.session = Some(GestureSession::begin(mode, *first));
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        for point in points {
            if session.contains(point.id) {
                trace!("duplicate touch-start for finger {} ignored", point.id);
                continue;
            }
            session.fingers.push(*point);
            session.tap_candidate = false;
            debug!(
                "finger {} merged into active session ({} down)",
                point.id,
                session.fingers.len()
            );
        }
    }

    fn touch_move(&mut self, points: &[TouchPoint]) -> Option<Intent> {
        let Some(session) = self.session.as_mut() else {
            trace!("touch-move without active session ignored");
            return None;
        };

        // Only the last reported position of the primary finger is tracked.
        let mut primary_point = None;
        for point in points {
            let Some(finger) = session.finger_mut(point.id) else {
                trace!("touch-move for unknown finger {} ignored", point.id);
                continue;
            };
            *finger = *point;
            if point.id == session.primary {
                primary_point = Some(*point);
            }
        }
        primary_point.and_then(|point| session.track_primary(&point, &self.config))
    }

    fn touch_end(&mut self, points: &[TouchPoint], allow_tap: bool) -> Option<Intent> {
        let Some(session) = self.session.as_mut() else {
            trace!("touch-end without active session ignored");
            return None;
        };

        let mut primary_lifted = false;
        let mut lifted_at_ms = session.started_at_ms;
        for point in points {
            if session.remove(point.id).is_none() {
                trace!("touch-end for unknown finger {} ignored", point.id);
                continue;
            }
            if point.id == session.primary {
                primary_lifted = true;
                lifted_at_ms = point.timestamp_ms;
                let (dx, dy) = offset(session.anchor, (point.x, point.y));
                if self.config.exceeds_tolerance_wide(dx, dy) {
                    session.tap_candidate = false;
                }
            }
        }

        if !session.fingers.is_empty() {
            if primary_lifted {
                session.promote_next_primary();
                debug!("primary finger lifted; finger {} now primary", session.primary);
            }
            return None;
        }

        let is_tap = allow_tap && primary_lifted && session.tap_candidate;
        debug!(
            "gesture session ended after {} ms (tap: {is_tap})",
            lifted_at_ms.saturating_sub(session.started_at_ms)
        );
        self.session = None;
        is_tap.then_some(Intent::Tap)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(GestureConfig::default())
    }

    fn start(id: u32, x: i32, y: i32) -> TouchEvent {
        TouchEvent::start(vec![TouchPoint::new(id, x, y)])
    }

    fn moved(id: u32, x: i32, y: i32) -> TouchEvent {
        TouchEvent::moved(vec![TouchPoint::new(id, x, y)])
    }

    fn end(id: u32, x: i32, y: i32) -> TouchEvent {
        TouchEvent::end(vec![TouchPoint::new(id, x, y)])
    }

    // ── Tolerance ─────────────────────────────────────────────────────────────

    #[test]
    fn test_tolerance_boundary_counts_as_inside() {
        let cfg = GestureConfig { jitter_tolerance_px: 5 };
        assert!(!cfg.exceeds_tolerance(3, 4), "distance 5 is on the boundary");
        assert!(cfg.exceeds_tolerance(4, 4), "distance ~5.66 is outside");
        assert!(!cfg.exceeds_tolerance(0, -5));
    }

    #[test]
    fn test_zero_tolerance_treats_any_movement_as_motion() {
        let cfg = GestureConfig { jitter_tolerance_px: 0 };
        assert!(!cfg.exceeds_tolerance(0, 0));
        assert!(cfg.exceeds_tolerance(1, 0));
    }

    // ── Cursor deltas ─────────────────────────────────────────────────────────

    #[test]
    fn test_first_move_outside_tolerance_emits_full_displacement() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 100, 100));

        // Act – the first move stays inside the circle, the second leaves it
        let inside = c.handle(&moved(1, 102, 101));
        let outside = c.handle(&moved(1, 110, 95));

        // Assert
        assert_eq!(inside, None);
        assert_eq!(outside, Some(Intent::CursorDelta { dx: 10, dy: -5 }));
    }

    #[test]
    fn test_identical_moves_are_not_coalesced() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 0, 0));
        c.handle(&moved(1, 20, 20));

        // Act
        let first = c.handle(&moved(1, 25, 17));
        let second = c.handle(&moved(1, 30, 14));

        // Assert
        assert_eq!(first, Some(Intent::CursorDelta { dx: 5, dy: -3 }));
        assert_eq!(second, Some(Intent::CursorDelta { dx: 5, dy: -3 }));
    }

    #[test]
    fn test_primary_reported_twice_in_one_move_keeps_full_displacement() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 0, 0));
        c.handle(&moved(1, 20, 0));

        // Act – one event carries two samples of the same finger
        let intent = c.handle(&TouchEvent::moved(vec![
            TouchPoint::new(1, 30, 0),
            TouchPoint::new(1, 40, 0),
        ]));

        // Assert
        assert_eq!(intent, Some(Intent::CursorDelta { dx: 20, dy: 0 }));
        assert_eq!(c.session().unwrap().last_emitted(), (40, 0));
    }

    #[test]
    fn test_extreme_coordinates_clamp_and_carry_the_remainder() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, i32::MAX, 0));

        // Act – a jump wider than i32 followed by a small move
        let wide = c.handle(&moved(1, i32::MIN, 0));
        let after = c.handle(&moved(1, 0, 0));

        // Assert – i32::MIN + 1 == 0 - i32::MAX, the net displacement
        assert_eq!(wide, Some(Intent::CursorDelta { dx: i32::MIN, dy: 0 }));
        assert_eq!(after, Some(Intent::CursorDelta { dx: 1, dy: 0 }));
    }

    #[test]
    fn test_tolerance_check_does_not_overflow_on_extreme_offsets() {
        let mut c = classifier();
        c.handle(&start(1, i32::MIN, i32::MIN));
        assert_eq!(c.handle(&end(1, i32::MAX, i32::MAX)), None);
    }

    #[test]
    fn test_move_to_same_position_emits_nothing() {
        let mut c = classifier();
        c.handle(&start(1, 0, 0));
        c.handle(&moved(1, 50, 0));
        assert_eq!(c.handle(&moved(1, 50, 0)), None);
    }

    #[test]
    fn test_scroll_mode_tags_deltas_as_scroll() {
        // Arrange
        let mut c = classifier();
        c.set_mode(GestureMode::Scroll);
        c.handle(&start(1, 0, 0));

        // Act
        let intent = c.handle(&moved(1, 0, -40));

        // Assert
        assert_eq!(intent, Some(Intent::ScrollDelta { dx: 0, dy: -40 }));
    }

    // ── Taps ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_start_then_end_is_a_tap() {
        let mut c = classifier();
        c.handle(&start(1, 50, 50));
        assert_eq!(c.handle(&end(1, 50, 50)), Some(Intent::Tap));
        assert!(!c.is_tracking());
    }

    #[test]
    fn test_jitter_within_tolerance_still_taps() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 50, 50));

        // Act
        let m1 = c.handle(&moved(1, 52, 49));
        let m2 = c.handle(&moved(1, 48, 53));
        let up = c.handle(&end(1, 49, 52));

        // Assert
        assert_eq!(m1, None);
        assert_eq!(m2, None);
        assert_eq!(up, Some(Intent::Tap));
    }

    #[test]
    fn test_leaving_tolerance_then_returning_is_not_a_tap() {
        let mut c = classifier();
        c.handle(&start(1, 50, 50));
        c.handle(&moved(1, 80, 50));
        c.handle(&moved(1, 50, 50));
        assert_eq!(c.handle(&end(1, 50, 50)), None);
    }

    #[test]
    fn test_lift_far_from_anchor_is_not_a_tap() {
        // A lift position outside the circle disqualifies the tap even if no
        // move event was delivered in between.
        let mut c = classifier();
        c.handle(&start(1, 50, 50));
        assert_eq!(c.handle(&end(1, 90, 50)), None);
    }

    #[test]
    fn test_cancel_never_taps() {
        let mut c = classifier();
        c.handle(&start(1, 50, 50));
        assert_eq!(c.handle(&TouchEvent::cancel(vec![TouchPoint::new(1, 50, 50)])), None);
        assert!(!c.is_tracking());
    }

    // ── Multi-finger merge ────────────────────────────────────────────────────

    #[test]
    fn test_second_finger_merges_into_existing_session() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 100, 100));
        c.handle(&moved(1, 120, 100));

        // Act – a second finger lands far away
        c.handle(&start(2, 400, 400));
        let intent = c.handle(&moved(1, 125, 100));

        // Assert – still tracking finger 1, no jump toward finger 2
        let session = c.session().expect("session must remain active");
        assert_eq!(session.finger_count(), 2);
        assert_eq!(session.primary_id(), 1);
        assert_eq!(intent, Some(Intent::CursorDelta { dx: 5, dy: 0 }));
    }

    #[test]
    fn test_secondary_finger_movement_emits_nothing() {
        let mut c = classifier();
        c.handle(&start(1, 100, 100));
        c.handle(&start(2, 200, 200));
        assert_eq!(c.handle(&moved(2, 260, 260)), None);
    }

    #[test]
    fn test_secondary_lift_keeps_session_alive() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 100, 100));
        c.handle(&start(2, 200, 200));

        // Act
        let intent = c.handle(&end(2, 200, 200));

        // Assert
        assert_eq!(intent, None);
        assert!(c.is_tracking());
        assert_eq!(c.session().map(|s| s.finger_count()), Some(1));
    }

    #[test]
    fn test_second_finger_cancels_tap() {
        let mut c = classifier();
        c.handle(&start(1, 100, 100));
        c.handle(&start(2, 110, 100));
        c.handle(&end(2, 110, 100));
        assert_eq!(c.handle(&end(1, 100, 100)), None);
    }

    #[test]
    fn test_primary_lift_promotes_next_finger_without_jump() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 100, 100));
        c.handle(&start(2, 300, 300));

        // Act
        c.handle(&end(1, 100, 100));
        let intent = c.handle(&moved(2, 310, 296));

        // Assert – delta is relative to finger 2's own position
        assert_eq!(c.session().map(|s| s.primary_id()), Some(2));
        assert_eq!(intent, Some(Intent::CursorDelta { dx: 10, dy: -4 }));
    }

    #[test]
    fn test_two_fingers_starting_together_track_the_first() {
        let mut c = classifier();
        c.handle(&TouchEvent::start(vec![
            TouchPoint::new(7, 10, 10),
            TouchPoint::new(8, 90, 90),
        ]));
        let session = c.session().unwrap();
        assert_eq!(session.primary_id(), 7);
        assert_eq!(session.finger_count(), 2);
    }

    // ── Mode changes ──────────────────────────────────────────────────────────

    #[test]
    fn test_mode_toggle_mid_gesture_applies_to_next_session() {
        // Arrange
        let mut c = classifier();
        c.handle(&start(1, 0, 0));

        // Act
        assert_eq!(c.toggle_mode(), GestureMode::Scroll);
        let during = c.handle(&moved(1, 30, 0));
        c.handle(&end(1, 30, 0));
        c.handle(&start(1, 0, 0));
        let after = c.handle(&moved(1, 30, 0));

        // Assert
        assert_eq!(during, Some(Intent::CursorDelta { dx: 30, dy: 0 }));
        assert_eq!(after, Some(Intent::ScrollDelta { dx: 30, dy: 0 }));
    }

    // ── Malformed input ───────────────────────────────────────────────────────

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut c = classifier();
        assert_eq!(c.handle(&moved(1, 10, 10)), None);
        assert!(!c.is_tracking());
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut c = classifier();
        assert_eq!(c.handle(&end(1, 10, 10)), None);
    }

    #[test]
    fn test_empty_start_is_ignored() {
        let mut c = classifier();
        c.handle(&TouchEvent::start(Vec::new()));
        assert!(!c.is_tracking());
    }

    #[test]
    fn test_duplicate_start_does_not_reset_anchor() {
        let mut c = classifier();
        c.handle(&start(1, 10, 10));
        c.handle(&start(1, 90, 90));
        let session = c.session().unwrap();
        assert_eq!(session.anchor(), (10, 10));
        assert_eq!(session.finger_count(), 1);
    }

    #[test]
    fn test_move_for_unknown_finger_is_ignored() {
        let mut c = classifier();
        c.handle(&start(1, 10, 10));
        assert_eq!(c.handle(&moved(9, 500, 500)), None);
        assert_eq!(c.session().unwrap().finger_count(), 1);
    }

    #[test]
    fn test_touch_phase_uses_lowercase_json_names() {
        let json = serde_json::to_string(&TouchPhase::Cancel).unwrap();
        assert_eq!(json, r#""cancel""#);
    }
}

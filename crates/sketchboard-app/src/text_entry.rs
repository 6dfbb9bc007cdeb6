//! Text entry collaborator.

use kurbo::Point;

/// Opens a text input when the board asks for one.
///
/// What the user types stays with the implementation; it is never added to
/// the scene.
pub trait TextEntry {
    /// Show a text input at `position` in canvas coordinates.
    fn request(&mut self, position: Point);
}

/// Text entry that only records and logs requests.
#[derive(Debug, Default)]
pub struct LoggingTextEntry {
    requests: Vec<Point>,
}

impl LoggingTextEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions requested so far, oldest first.
    pub fn requests(&self) -> &[Point] {
        &self.requests
    }
}

impl TextEntry for LoggingTextEntry {
    fn request(&mut self, position: Point) {
        log::info!("Text entry requested at ({}, {})", position.x, position.y);
        self.requests.push(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_requests() {
        let mut entry = LoggingTextEntry::new();
        entry.request(Point::new(1.0, 2.0));
        entry.request(Point::new(3.0, 4.0));
        assert_eq!(entry.requests(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }
}

use crate::Point;

/// Star points (hoshi) for drawing an odd square board of size 7 or more.
///
/// Boards of 13 and up get all nine points, three lines in from the edge.
/// Smaller boards get the four corners and the centre, two lines in.
/// Any other size has no star points.
pub fn star_points(size: u8) -> Vec<Point> {
    if size < 7 || size.is_multiple_of(2) {
        return Vec::new();
    }

    let off = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - off;
    let mid = size / 2;

    let mut pts = vec![(off, off), (far, off), (off, far), (far, far), (mid, mid)];
    if size >= 13 {
        pts.extend([(mid, off), (off, mid), (far, mid), (mid, far)]);
    }
    pts
}

//! Game view tests - pure snapshot-to-framebuffer rendering

use tui_2048::core::GameSnapshot;
use tui_2048::term::{GameView, TilePalette, Viewport};

fn snapshot_4x4() -> GameSnapshot {
    let mut snap = GameSnapshot::default();
    snap.size = 4;
    snap
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_4x4();
    let view = GameView::default();

    // With cell_w=7 and cell_h=1:
    // board pixels = 4*7 by 4*1 => 28x4, plus border => 30x6.
    let vp = Viewport::new(30, 6);
    let fb = view.render(&snap, None, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(29, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value_in_cell() {
    let mut snap = snapshot_4x4();
    snap.board[0][0] = 2048;

    let view = GameView::default();
    let fb = view.render(&snap, None, Viewport::new(30, 6));

    // First cell spans columns 1..=7 on row 1; "2048" is centered, so the
    // digits start at column 1 + (7-4)/2 = 2.
    let text: String = (2..6).map(|x| fb.get(x, 1).unwrap().ch).collect();
    assert_eq!(text, "2048");
}

#[test]
fn term_view_marks_empty_cells_with_dot() {
    let snap = snapshot_4x4();
    let view = GameView::default();
    let fb = view.render(&snap, None, Viewport::new(30, 6));

    // Center column of the first empty cell.
    assert_eq!(fb.get(4, 1).unwrap().ch, '·');
}

#[test]
fn term_view_colors_tiles_from_palette() {
    let mut snap = snapshot_4x4();
    snap.board[0][0] = 2;
    snap.board[1][0] = 64;

    let palette = TilePalette::default();
    let view = GameView::default();
    let fb = view.render(&snap, None, Viewport::new(30, 6));

    // The centered digit carries the palette color for its value.
    assert_eq!(fb.get(4, 1).unwrap().style.fg, palette.color(2));
    assert_eq!(fb.get(3, 2).unwrap().style.fg, palette.color(64));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot_4x4();
    snap.score = 1234;

    let view = GameView::default();
    let fb = view.render(&snap, None, Viewport::new(60, 10));

    let all: String = (0..10)
        .flat_map(|y| (0..60).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("4x4"));
}

#[test]
fn term_view_shows_win_banner_only_after_win() {
    let view = GameView::default();

    let snap = snapshot_4x4();
    let fb = view.render(&snap, None, Viewport::new(60, 10));
    let all: String = (0..10)
        .flat_map(|y| (0..60).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(!all.contains("YOU WIN!"));

    let mut snap = snapshot_4x4();
    snap.won = true;
    let fb = view.render(&snap, None, Viewport::new(60, 10));
    let all: String = (0..10)
        .flat_map(|y| (0..60).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("keep going"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = snapshot_4x4();
    snap.game_over = true;

    let view = GameView::default();
    let fb = view.render(&snap, None, Viewport::new(30, 6));

    let all: String = (0..6)
        .flat_map(|y| (0..30).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(all.contains("GAME OVER"));
}

#[test]
fn term_view_renders_status_line_under_board() {
    let snap = snapshot_4x4();
    let view = GameView::default();
    let fb = view.render(&snap, Some("nothing moved"), Viewport::new(30, 8));

    let all: String = (0..8)
        .flat_map(|y| (0..30).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(all.contains("nothing moved"));
}

#[test]
fn term_view_accepts_a_custom_palette() {
    use tui_2048::term::Rgb;

    let mut snap = snapshot_4x4();
    snap.board[0][0] = 2;

    let red = Rgb::new(200, 0, 0);
    let palette = TilePalette::new(vec![(2, red)], Rgb::new(1, 2, 3));
    let view = GameView::new(7, 1, palette);
    let fb = view.render(&snap, None, Viewport::new(30, 6));

    assert_eq!(fb.get(4, 1).unwrap().style.fg, red);
}

#[test]
fn term_view_scales_to_eight_by_eight() {
    let mut snap = GameSnapshot::default();
    snap.size = 8;
    snap.board[7][7] = 4;

    let view = GameView::default();
    let (w, h) = view.frame_size(8);
    let fb = view.render(&snap, None, Viewport::new(w, h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

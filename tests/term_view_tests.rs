use quadfall::core::{Engine, GameConfig, Grid, PieceGenerator};
use quadfall::input::{map_key, KeyCommand};
use quadfall::term::{GameView, Viewport};
use quadfall::types::{Intent, PieceKind};

use crossterm::event::{KeyCode, KeyEvent};

fn engine() -> Engine {
    Engine::with_parts(
        GameConfig::default(),
        PieceGenerator::scripted(&[PieceKind::O, PieceKind::T]),
        Grid::new(10, 20),
    )
    .unwrap()
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let fb = GameView::default().render(&engine().snapshot(), None, Viewport::new(22, 30));
    // Frame is 22 rows tall, so it starts (30 - 22) / 2 = 4 rows down.
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_draws_locked_cells_two_columns_wide() {
    let mut engine = engine();
    engine.submit_intent(Intent::HardDrop);
    let fb = GameView::default().render(&engine.snapshot(), None, Viewport::new(22, 22));

    // O locked on rows 18..=19, columns 4..=5.
    for x in 9..13 {
        assert_eq!(fb.get(x, 20).unwrap().ch, '█');
    }
    assert_eq!(fb.get(8, 20).unwrap().ch, '·');
}

#[test]
fn term_view_tracks_keys_through_the_engine() {
    let mut engine = engine();
    let Some(KeyCommand::Intent(intent)) = map_key(KeyEvent::from(KeyCode::Left)) else {
        panic!("left arrow should map to an intent");
    };
    assert!(engine.submit_intent(intent));
    let fb = GameView::default().render(&engine.snapshot(), None, Viewport::new(22, 22));
    // O moved one column left: columns 3..=4 on grid row 0.
    assert_eq!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 5 * 2, 1).unwrap().ch, '·');
}

use super::Scroll;

#[test]
fn it_stays_at_top_when_content_fits() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 20);
    scroll.down();
    scroll.last();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_scrolling_down() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 20);
    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position, 10);
}

#[test]
fn it_scrolls_to_last_and_back_up() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 20);
    scroll.last();
    assert_eq!(scroll.position, 30);

    scroll.up();
    scroll.up_page();
    assert_eq!(scroll.position, 19);
}

#[test]
fn it_clamps_when_content_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(50, 20);
    scroll.last();
    scroll.set_state(0, 20);
    assert_eq!(scroll.position, 0);
}

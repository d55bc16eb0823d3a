//! The concrete seed scenarios: each exercises the public `Console` API
//! end to end rather than any one crate in isolation.

use gt_console::{style, Console, Preset};

fn grid_glyph(console: &Console, col: i32, row: i32) -> char {
    char::from_u32(console.char_at_ref(col, row).unwrap().glyph).unwrap()
}

/// S1: bold only applies to the cell it was set before, not earlier ones.
#[test]
fn s1_hello_bold() {
    let mut console = Console::new(20, 5, 160, 40);
    console.set_palette(Preset::Vintage);
    console.cls();
    console.print("AB");
    console.set_style(style::BOLD);
    console.print("C");
    console.newline();
    console.println("D");

    assert_eq!(grid_glyph(&console, 0, 0), 'A');
    assert_eq!(console.char_at_ref(0, 0).unwrap().style, 0);
    assert_eq!(grid_glyph(&console, 1, 0), 'B');
    assert_eq!(console.char_at_ref(1, 0).unwrap().style, 0);
    assert_eq!(grid_glyph(&console, 2, 0), 'C');
    assert_eq!(console.char_at_ref(2, 0).unwrap().style, style::BOLD);
    assert_eq!(grid_glyph(&console, 0, 1), 'D');
    assert_eq!(console.char_at_ref(0, 1).unwrap().style, style::BOLD);
    assert_eq!(console.char_at_ref(1, 1).unwrap().glyph, 0x20);
    assert_eq!(console.cursor(), (0, 2));
}

/// S2: scroll keeps the last `rows` printed lines, in order.
#[test]
fn s2_scroll() {
    let mut console = Console::new(4, 2, 32, 16);
    console.println("abcd");
    console.println("efgh");
    console.println("ijkl");

    let row0: String = (0..4).map(|c| grid_glyph(&console, c, 0)).collect();
    let row1: String = (0..4).map(|c| grid_glyph(&console, c, 1)).collect();
    assert_eq!(row0, "efgh");
    assert_eq!(row1, "ijkl");
    assert_eq!(console.cursor(), (0, 1));
}

/// S3: restore pops the whole saved state, cursor included, so the next
/// `print` lands back where `save` found it.
#[test]
fn s3_save_restore() {
    let mut console = Console::new(10, 2, 80, 16);
    console.set_fg(1); // red
    console.save();
    console.set_fg(4); // blue
    console.print("X");
    console.restore();
    console.print("Y");

    assert_eq!(grid_glyph(&console, 0, 0), 'Y');
    assert_eq!(console.char_at_ref(0, 0).unwrap().fg(), 1);
    assert_eq!(grid_glyph(&console, 1, 0), 'X');
    assert_eq!(console.char_at_ref(1, 0).unwrap().fg(), 4);
}

/// S4: markup colors nest and unwind correctly, with default fg=grey(8)
/// bg=black(0) outside any tag.
#[test]
fn s4_markup() {
    let mut console = Console::new(10, 2, 80, 16);
    console.cprint("<red>a<on_blue>b</on_blue>c</red>d");

    let cell = |c: i32| *console.char_at_ref(c, 0).unwrap();
    assert_eq!(char::from_u32(cell(0).glyph).unwrap(), 'a');
    assert_eq!((cell(0).fg(), cell(0).bg()), (1, 0));
    assert_eq!(char::from_u32(cell(1).glyph).unwrap(), 'b');
    assert_eq!((cell(1).fg(), cell(1).bg()), (1, 4));
    assert_eq!(char::from_u32(cell(2).glyph).unwrap(), 'c');
    assert_eq!((cell(2).fg(), cell(2).bg()), (1, 0));
    assert_eq!(char::from_u32(cell(3).glyph).unwrap(), 'd');
    assert_eq!((cell(3).fg(), cell(3).bg()), (8, 0));
}

/// S5: SGR sets fg/bg for `X`, then a full reset before `Y`.
#[test]
fn s5_sgr() {
    let mut console = Console::new(10, 2, 80, 16);
    console.print_ans(b"\x1b[31;44mX\x1b[0mY", 0, 0);

    let x = *console.char_at_ref(0, 0).unwrap();
    assert_eq!(char::from_u32(x.glyph).unwrap(), 'X');
    assert_eq!((x.fg(), x.bg()), (1, 4));

    let y = *console.char_at_ref(1, 0).unwrap();
    assert_eq!(char::from_u32(y.glyph).unwrap(), 'Y');
    assert_eq!((y.fg(), y.bg()), (8, 0));
}

/// S6: recognized entities decode, an unknown one is silently dropped.
#[test]
fn s6_entities() {
    let mut console = Console::new(10, 2, 80, 16);
    console.cprint("&lt;&amp;&gt;&nosuch;");

    assert_eq!(grid_glyph(&console, 0, 0), '<');
    assert_eq!(grid_glyph(&console, 1, 0), '&');
    assert_eq!(grid_glyph(&console, 2, 0), '>');
    assert_eq!(console.char_at_ref(3, 0).unwrap().glyph, 0x20);
}

use pretty_assertions::assert_eq;
use xamlforge_markup::{deduplicate_names, render_document, Tag, NAME_ATTRIBUTE};

fn canvas(name: &str) -> Tag {
    Tag::with_attributes("Canvas", [(NAME_ATTRIBUTE, name), ("Width", "10"), ("Height", "10")])
}

#[test]
fn dedup_then_render() {
    let mut first = canvas("Rect");
    first.add_child(Tag::comment([("Name", "Rect")])).unwrap();

    let mut background = Tag::new("Canvas.Background");
    background
        .add_child(Tag::with_attributes("SolidColorBrush", [("Color", "#ff0000")]))
        .unwrap();
    let mut second = canvas("Rect");
    second.add_child(background).unwrap();

    let mut root = Tag::with_attributes("Canvas", [(NAME_ATTRIBUTE, "Root")]);
    root.add_child(first).unwrap();
    root.add_child(second).unwrap();

    deduplicate_names(&mut root);
    let text = render_document(&root, 2).unwrap();

    let expected = "\
<Canvas x:Name=\"Root\" >
  <Canvas x:Name=\"Rect\" Width=\"10\" Height=\"10\" >
    <!-- Name=\"Rect\" -->
  </Canvas>
  <Canvas x:Name=\"Rect_1\" Width=\"10\" Height=\"10\" >
    <Canvas.Background>
      <SolidColorBrush Color=\"#ff0000\" />
    </Canvas.Background>
  </Canvas>
</Canvas>
";
    assert_eq!(text, expected);
}

#[test]
fn every_line_is_newline_terminated() {
    let mut root = canvas("Root");
    root.add_child(canvas("A")).unwrap();
    let text = render_document(&root, 2).unwrap();

    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
    assert_eq!(text.lines().count(), 3);
}

use communicator_application::ThumbnailArtifact;
use communicator_domain::{Board, DraftEditor, PictogramCatalog, PictogramEntry};

pub fn present_board_row(index: usize, board: &Board) -> String {
    format!("{}\t{}\t{} options", index, board.name, board.options.len())
}

pub fn present_board(board: &Board) -> String {
    let mut out = format!("board {}", board.name);
    for (index, option) in board.options.iter().enumerate() {
        out.push_str(&format!(
            "\n  {}\t{}\t{}",
            index, option.title, option.image_file_name
        ));
    }
    out
}

pub fn present_draft(draft: &DraftEditor) -> String {
    let mut out = format!("draft {:?}", draft.name());
    for (index, slot) in draft.slots().iter().enumerate() {
        let marker = if draft.selected() == Some(index) { '*' } else { ' ' };
        let line = match slot.image_file_name() {
            Some(image) => format!("\n{marker} {index}\t{}\t{image}", slot.title()),
            None => format!("\n{marker} {index}\t(empty)"),
        };
        out.push_str(&line);
    }
    out
}

pub fn present_catalog(catalog: &PictogramCatalog) -> String {
    let mut lines = vec![format!("{}", catalog.root().display())];
    for entry in catalog.entries() {
        push_entry(&mut lines, entry, 1);
    }
    lines.join("\n")
}

fn push_entry(lines: &mut Vec<String>, entry: &PictogramEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    match entry {
        PictogramEntry::Category { name, children, .. } => {
            lines.push(format!("{indent}{name}/"));
            for child in children {
                push_entry(lines, child, depth + 1);
            }
        }
        PictogramEntry::Leaf { name, .. } => lines.push(format!("{indent}{name}")),
    }
}

pub fn present_thumbnail(thumb: &ThumbnailArtifact) -> String {
    format!(
        "thumbnail {} ({}x{})",
        thumb.file_path.display(),
        thumb.width,
        thumb.height
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use communicator_domain::{BoardOption, CatalogBuilder};

    use super::*;

    #[test]
    fn board_presentation_lists_options_in_order() {
        let board = Board::new(
            "Animals",
            vec![
                BoardOption::new("/p/dog.png", "DOG"),
                BoardOption::new("/p/cat.png", "Kitty"),
            ],
        );

        assert_eq!(present_board_row(0, &board), "0\tAnimals\t2 options");
        assert_eq!(
            present_board(&board),
            "board Animals\n  0\tDOG\t/p/dog.png\n  1\tKitty\t/p/cat.png"
        );
    }

    #[test]
    fn draft_presentation_marks_selection_and_empty_slots() {
        let mut draft = DraftEditor::new(2);
        draft.set_name("Pets");
        draft.add_option("/p/dog.png", None).expect("slot 0");
        draft.select_slot(1).expect("in range");

        assert_eq!(
            present_draft(&draft),
            "draft \"Pets\"\n  0\tDOG\t/p/dog.png\n* 1\t(empty)"
        );
    }

    #[test]
    fn catalog_presentation_indents_categories() {
        let mut builder = CatalogBuilder::new("pics");
        builder.push_category(1, "animals", PathBuf::from("pics/animals"));
        builder.push_leaf(2, "dog.png", PathBuf::from("pics/animals/dog.png"));
        builder.push_leaf(1, "no.png", PathBuf::from("pics/no.png"));

        assert_eq!(
            present_catalog(&builder.finish()),
            "pics\n  animals/\n    dog.png\n  no.png"
        );
    }
}

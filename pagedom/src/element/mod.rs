mod content;
mod node;

pub use content::Content;
pub use node::{Descendants, Element, TEXT_TAG};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    let path = find_path(root, id)?;
    element_at_mut(root, &path)
}

/// Child indices leading from `root` to the element with the given ID.
/// The root itself has an empty path.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<usize>> {
    if root.id == id {
        return Some(Vec::new());
    }

    for (index, child) in root.child_nodes().iter().enumerate() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

pub fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    let mut current = root;
    for &index in path {
        current = current.child_nodes().get(index)?;
    }
    Some(current)
}

pub fn element_at_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path {
        current = current.child_nodes_mut()?.get_mut(index)?;
    }
    Some(current)
}

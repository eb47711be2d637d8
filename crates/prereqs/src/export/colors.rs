use indexmap::IndexMap;
use rand::Rng;

use prereqs_core::color::Color;

/// Draws one random color per distinct department.
///
/// Departments are colored in first-seen order, so the same sequence of
/// departments and the same random source always give the same colors.
pub fn department_colors<'a, I, R>(departments: I, rng: &mut R) -> IndexMap<String, Color>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng + ?Sized,
{
    let mut colors = IndexMap::new();
    for department in departments {
        if !colors.contains_key(department) {
            let color = Color::rgb(rng.random(), rng.random(), rng.random());
            colors.insert(department.to_string(), color);
        }
    }
    colors
}

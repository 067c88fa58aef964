//! Built-in demo page, shown when no file is given.

use super::types::{Page, Section};

const DEMO_TITLE: &str = "Landing Page";
const DEMO_FOOTER: &str = "© Landing Page";

const PARAGRAPH_ONE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Morbi fermentum metus faucibus lectus pharetra dapibus. Suspendisse potenti. Aenean aliquam elementum mi, ac euismod augue. Donec eget lacinia ex. Phasellus imperdiet porta orci eget mollis. Sed convallis sollicitudin mauris ac tincidunt. Donec bibendum, nulla eget bibendum consectetur, sem nisi aliquam leo, ut pulvinar quam nunc eu augue. Pellentesque maximus imperdiet elit a pharetra. Duis lectus mi, aliquam in mi quis, aliquam porttitor lacus. Morbi a tincidunt felis. Sed leo nunc, pharetra et elementum non, faucibus vitae elit. Integer nec libero venenatis libero ultricies molestie semper in tellus. Sed congue et odio sed euismod.";

const PARAGRAPH_TWO: &str = "Aliquam a convallis justo. Vivamus venenatis, erat eget pulvinar gravida, ipsum lacus aliquet velit, vel luctus diam ipsum a diam. Cras eu tincidunt arcu, vitae rhoncus purus. Vestibulum fermentum consectetur porttitor. Suspendisse imperdiet porttitor tortor, eget elementum tortor mollis non.";

impl Page {
    pub fn demo(count: usize) -> Self {
        demo(count)
    }
}

/// Build a page with `count` placeholder sections `section1..sectionN`.
pub fn demo(count: usize) -> Page {
    let sections = (1..=count)
        .map(|i| {
            Section::new(
                format!("section{i}"),
                format!("Section {i}"),
                vec![PARAGRAPH_ONE.to_string(), PARAGRAPH_TWO.to_string()],
            )
        })
        .collect();
    Page::new(
        Some(DEMO_TITLE.to_string()),
        Vec::new(),
        sections,
        Some(DEMO_FOOTER.to_string()),
    )
}

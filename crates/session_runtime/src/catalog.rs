//! Static application catalog consumed by the session store.
//!
//! Descriptors are configuration, not behavior: the store never mutates
//! them, and the presentation layer owns how they render.

use crate::model::{AppDescriptor, AppKind, IconPosition, WindowSize};

/// Start-menu shortcuts, in menu order.
pub const START_MENU_KEYS: &[&str] = &[
    "computer", "mine", "spider", "paint", "website", "notepad", "resume", "virus",
];

/// Applications that never open on a mobile-classified client.
pub const MOBILE_BLOCKED_APPS: &[&str] = &["spider"];

/// Default application registry.
pub const DEFAULT_CATALOG: &[AppDescriptor] = &[
    AppDescriptor {
        icon: Some("computer.png"),
        desktop_position: Some(IconPosition { x: 10, y: 1 }),
        toolbar_menus: &["File", "Edit", "View", "Favorites", "Tools", "Help"],
        children: &["music", "social", "pictures", "work"],
        ..AppDescriptor::new("computer", "My Computer", AppKind::Folder)
    },
    AppDescriptor {
        icon: Some("music.png"),
        desktop_position: Some(IconPosition { x: 18, y: 100 }),
        children: &["eyes", "moon", "road", "leaves"],
        ..AppDescriptor::new("music", "My Music", AppKind::Folder)
    },
    AppDescriptor {
        icon: Some("pictures.png"),
        desktop_position: Some(IconPosition { x: 10, y: 200 }),
        children: &["harbor", "skyline", "sunrise"],
        ..AppDescriptor::new("pictures", "My Pictures", AppKind::Folder)
    },
    AppDescriptor {
        icon: Some("work.png"),
        desktop_position: Some(IconPosition { x: 2, y: 300 }),
        children: &["aws", "mozilla", "rustfdn"],
        ..AppDescriptor::new("work", "Work Experience", AppKind::Folder)
    },
    AppDescriptor {
        icon: Some("social.png"),
        desktop_position: Some(IconPosition { x: 115, y: 400 }),
        children: &["forge", "feed", "mail", "vault"],
        ..AppDescriptor::new("social", "My Social Media", AppKind::Folder)
    },
    AppDescriptor {
        icon: Some("paint.png"),
        embed_url: Some("https://jspaint.app"),
        desktop_position: Some(IconPosition { x: 20, y: 400 }),
        ..AppDescriptor::new("paint", "Paint", AppKind::Widget)
    },
    AppDescriptor {
        icon: Some("globe.png"),
        embed_url: Some("https://example.com"),
        desktop_position: Some(IconPosition { x: 120, y: 1 }),
        ..AppDescriptor::new("website", "Old Website", AppKind::Widget)
    },
    AppDescriptor {
        icon: Some("resume.png"),
        desktop_position: Some(IconPosition { x: 130, y: 100 }),
        ..AppDescriptor::new("resume", "Resume", AppKind::Image)
    },
    AppDescriptor {
        icon: Some("notepad.png"),
        desktop_position: Some(IconPosition { x: 130, y: 200 }),
        toolbar_menus: &["File", "Edit", "Format", "View", "Help"],
        ..AppDescriptor::new("notepad", "Notepad", AppKind::Notepad)
    },
    AppDescriptor {
        icon: Some("spider.png"),
        embed_url: Some("https://www.squidbyte.com/games/spidersolitairewindowsxp/"),
        desktop_position: Some(IconPosition { x: 130, y: 490 }),
        preferred_size: Some(WindowSize { w: 800.0, h: 530.0 }),
        ..AppDescriptor::new("spider", "Spider", AppKind::Widget)
    },
    AppDescriptor {
        icon: Some("virus.png"),
        desktop_position: Some(IconPosition { x: 115, y: 300 }),
        ..AppDescriptor::new("virus", "VIRUS !!! DO NOT CLICK!!!!", AppKind::Virus)
    },
    AppDescriptor {
        icon: Some("messenger.png"),
        desktop_position: Some(IconPosition { x: 18, y: 485 }),
        toolbar_menus: &["Messenger", "Help"],
        preferred_size: Some(WindowSize { w: 300.0, h: 500.0 }),
        ..AppDescriptor::new("messenger", "Messenger", AppKind::Messenger)
    },
    AppDescriptor {
        icon: Some("mine.png"),
        desktop_position: Some(IconPosition { x: 220, y: 120 }),
        toolbar_menus: &["Game", "Help"],
        preferred_size: Some(WindowSize { w: 307.5, h: 410.0 }),
        ..AppDescriptor::new("mine", "Minesweeper", AppKind::Minesweeper)
    },
    AppDescriptor {
        icon: Some("internet.png"),
        desktop_position: Some(IconPosition { x: 215, y: 205 }),
        toolbar_menus: &["File", "Edit", "View", "Favorites", "Tools", "Help"],
        ..AppDescriptor::new("internet", "Internet", AppKind::Browser)
    },
    // Folder children: not desktop-visible, reachable through the explorer.
    AppDescriptor {
        icon: Some("eyes.jpg"),
        external_link: Some("https://www.youtube.com/watch?v=LcJm1pOswfM"),
        ..AppDescriptor::new("eyes", "Can't Take My Eyes Off You", AppKind::External)
    },
    AppDescriptor {
        icon: Some("moon.jpg"),
        external_link: Some("https://www.youtube.com/watch?v=ZEcqHA7dbwM"),
        ..AppDescriptor::new("moon", "Fly Me To The Moon", AppKind::External)
    },
    AppDescriptor {
        icon: Some("road.jpg"),
        external_link: Some("https://www.youtube.com/watch?v=Q8Tiz6INF7I"),
        ..AppDescriptor::new("road", "Hit The Road, Jack", AppKind::External)
    },
    AppDescriptor {
        icon: Some("leaves.jpg"),
        external_link: Some("https://www.youtube.com/watch?v=bTZoLwWfACA"),
        ..AppDescriptor::new("leaves", "Autumn Leaves", AppKind::External)
    },
    AppDescriptor {
        icon: Some("harbor.jpg"),
        ..AppDescriptor::new("harbor", "06/14/2021", AppKind::Image)
    },
    AppDescriptor {
        icon: Some("skyline.jpg"),
        ..AppDescriptor::new("skyline", "11/25/2019", AppKind::Image)
    },
    AppDescriptor {
        icon: Some("sunrise.jpg"),
        ..AppDescriptor::new("sunrise", "08/07/2020", AppKind::Image)
    },
    AppDescriptor {
        icon: Some("aws.png"),
        external_link: Some("https://aws.amazon.com/"),
        ..AppDescriptor::new("aws", "Amazon Web Services", AppKind::External)
    },
    AppDescriptor {
        icon: Some("mozilla.png"),
        external_link: Some("https://www.mozilla.org/"),
        ..AppDescriptor::new("mozilla", "Mozilla", AppKind::External)
    },
    AppDescriptor {
        icon: Some("rust.png"),
        external_link: Some("https://foundation.rust-lang.org/"),
        ..AppDescriptor::new("rustfdn", "Rust Foundation", AppKind::External)
    },
    AppDescriptor {
        icon: Some("forge.png"),
        external_link: Some("https://github.com/"),
        ..AppDescriptor::new("forge", "GitHub", AppKind::External)
    },
    AppDescriptor {
        icon: Some("feed.png"),
        external_link: Some("https://mastodon.social/"),
        ..AppDescriptor::new("feed", "Mastodon", AppKind::External)
    },
    AppDescriptor {
        icon: Some("mail.png"),
        external_link: Some("mailto:hello@example.com"),
        ..AppDescriptor::new("mail", "Email", AppKind::External)
    },
    AppDescriptor {
        icon: Some("vault.png"),
        ..AppDescriptor::new("vault", "Private Vault", AppKind::Restricted)
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_subsets_reference_registered_keys() {
        for key in START_MENU_KEYS.iter().chain(MOBILE_BLOCKED_APPS) {
            assert!(
                DEFAULT_CATALOG.iter().any(|app| app.key == *key),
                "unknown curated key `{key}`"
            );
        }
    }

    #[test]
    fn folder_children_reference_registered_keys() {
        for folder in DEFAULT_CATALOG.iter().filter(|app| app.is_folder()) {
            for child in folder.children {
                assert!(
                    DEFAULT_CATALOG.iter().any(|app| app.key == *child),
                    "folder `{}` lists unknown child `{child}`",
                    folder.key
                );
            }
        }
    }
}

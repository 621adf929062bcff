//! Terminal list views for the board
//!
//! One view per board column. Each view subscribes an observer that filters
//! the snapshot down to its status and re-renders that section.

use store::{Project, ProjectStatus, ProjectStore, SubscriptionId};

/// Render one status section from a snapshot
pub fn render_section(status: ProjectStatus, snapshot: &[Project]) -> String {
    let projects: Vec<&Project> = snapshot.iter().filter(|p| p.status() == status).collect();

    let mut out = format!(
        "{} PROJECTS ({})\n",
        status.label().to_uppercase(),
        projects.len()
    );
    if projects.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for project in &projects {
            out.push_str(&format!(
                "  - {} ({} people): {}\n",
                project.title(),
                project.people(),
                project.description()
            ));
        }
    }
    out
}

/// Terminal list view for one board column
///
/// Holds its subscription handle so a session can detach it later. The
/// observer owns everything it renders with; it never reaches back into the
/// store.
pub struct StatusListView {
    status: ProjectStatus,
    store: ProjectStore,
    subscription: SubscriptionId,
}

impl StatusListView {
    /// Subscribe a rendering observer for `status` on the store
    pub fn attach(store: &ProjectStore, status: ProjectStatus) -> Self {
        let subscription = store.subscribe(move |snapshot| {
            println!("{}", render_section(status, &snapshot));
        });
        Self {
            status,
            store: store.clone(),
            subscription,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Remove the view's subscription from the store
    pub fn detach(self) -> bool {
        self.store.unsubscribe(self.subscription)
    }
}

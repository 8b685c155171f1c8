//! Parent filters
//!
//! No record references its children, so every child query is a full scan
//! of the child collection filtered by one or two parent-id fields.

/// Which records of a collection a listing keeps
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ParentFilter {
    /// Keep everything (tabs are root-level)
    #[default]
    All,
    /// `tabId` equals the given id
    Tab(String),
    /// `topicId` equals the given id
    Topic(String),
    /// Both `tabId` and `topicId` match
    TabTopic { tab_id: String, topic_id: String },
}

impl ParentFilter {
    pub fn tab(id: impl Into<String>) -> Self {
        ParentFilter::Tab(id.into())
    }

    pub fn topic(id: impl Into<String>) -> Self {
        ParentFilter::Topic(id.into())
    }

    /// Generic matcher over a record's optional parent fields.
    /// A record lacking a field the filter needs never matches.
    pub fn accepts(&self, tab_id: Option<&str>, topic_id: Option<&str>) -> bool {
        match self {
            ParentFilter::All => true,
            ParentFilter::Tab(id) => tab_id == Some(id.as_str()),
            ParentFilter::Topic(id) => topic_id == Some(id.as_str()),
            ParentFilter::TabTopic { tab_id: t, topic_id: p } => {
                tab_id == Some(t.as_str()) && topic_id == Some(p.as_str())
            }
        }
    }
}

//! Marketing copy for the signed-out landing page
//!
//! Shared by the web landing page and the terminal renderer.

pub const BRAND: &str = "Thummar Analytics";

pub const BADGE: (&str, &str) = ("🚀", "Powered by Advanced Analytics");

pub const HEADLINE: &str = "Turning Data into Decisions";

pub const SUBTITLE: &str = "Thummar Analytics empowers your business with real-time insights, \
beautiful visualizations, and actionable intelligence to drive growth.";

/// `(value, label)` figures under the hero buttons
pub const HERO_STATS: [(&str, &str); 3] = [
    ("10K+", "Active Users"),
    ("99.9%", "Uptime"),
    ("50M+", "Data Points"),
];

/// `(icon, value, label)` tiles on the dashboard preview card
pub const PREVIEW_STATS: [(&str, &str, &str); 3] = [
    ("💰", "$1.2M", "Revenue"),
    ("📦", "15.4K", "Orders"),
    ("👥", "8.9K", "Users"),
];

pub const PREVIEW_HOST: &str = "dashboard.thummar.com";

pub const FEATURES_TITLE: &str = "Powerful Features";

pub const FEATURES_SUBTITLE: &str = "Everything you need to make data-driven decisions";

/// `(icon, title, description)`
pub const FEATURES: [(&str, &str, &str); 6] = [
    ("📊", "KPI Monitoring", "Track all your key performance indicators in real-time"),
    ("📈", "Interactive Charts", "Visualize your data with dynamic charts"),
    ("📋", "Reports & Insights", "Generate comprehensive reports"),
    ("📥", "PDF / CSV Exports", "Export your data in multiple formats"),
    ("⚡", "Real-time Updates", "Watch your metrics update in real-time"),
    ("🔒", "Role-based Access", "Control who sees what with permissions"),
];

pub const CTA_TITLE: &str = "Ready to Transform Your Data?";

pub const CTA_BODY: &str = "Join thousands of businesses already using Thummar Analytics";

pub const COPYRIGHT: &str = "© 2024 Thummar Analytics. All rights reserved.";

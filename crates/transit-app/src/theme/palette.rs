//! Tailwind class palette.
//!
//! Every class string the views repeat lives here so the light and dark
//! variants stay in one place.

// --- Page shell ---
pub const SHELL_LIGHT: &str = "min-h-screen bg-gray-50";
pub const SHELL_DARK: &str = "min-h-screen dark bg-gray-900";

// --- Navigation ---
pub const NAV_BAR: &str = "fixed w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm z-50";
pub const NAV_LINK: &str = "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-300";
pub const BRAND_ICON: &str = "h-8 w-8 text-blue-600 dark:text-blue-400 animate-bounce-in";
pub const BRAND_TEXT: &str = "ml-2 text-xl font-bold text-gray-900 dark:text-white";
pub const TOGGLE_BUTTON: &str = "p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 transition-all duration-300 hover:scale-110";
pub const BACK_LINK: &str = "mb-8 inline-flex items-center text-blue-600 dark:text-blue-400 hover:text-blue-800 dark:hover:text-blue-300 transition-colors duration-300 animate-fade-in";

// --- Buttons ---
pub const PRIMARY_BUTTON: &str = "bg-blue-600 dark:bg-blue-500 text-white px-6 py-2 rounded-lg hover:bg-blue-700 dark:hover:bg-blue-600 transition-all duration-300 hover:scale-105 hover:shadow-lg";

// --- Surfaces ---
pub const PANEL: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-xl p-8 animate-scale";
pub const CARD: &str = "p-6 bg-gray-50 dark:bg-gray-700 rounded-lg transform transition-all duration-300 hover:scale-105 hover:shadow-xl animate-scale";
pub const PAGE_TITLE: &str =
    "text-3xl font-bold text-gray-900 dark:text-white mb-8 animate-slide-up";
pub const FORM_LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300";
pub const FORM_CONTROL: &str = "mt-1 block w-full rounded-md border-gray-300 dark:border-gray-600 shadow-sm focus:border-blue-500 focus:ring-blue-500 dark:bg-gray-700 dark:text-white";

// --- Status text ---
pub const TEXT_GREEN: &str = "text-green-500";
pub const TEXT_YELLOW: &str = "text-yellow-500";
pub const TEXT_RED: &str = "text-red-500";

// --- Update panels ---
pub const PANEL_GREEN: &str =
    "text-green-800 dark:text-green-200 bg-green-100 dark:bg-green-900/20";
pub const PANEL_YELLOW: &str =
    "text-yellow-800 dark:text-yellow-200 bg-yellow-100 dark:bg-yellow-900/20";
pub const PANEL_BLUE: &str = "text-blue-800 dark:text-blue-200 bg-blue-100 dark:bg-blue-900/20";

pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-6";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const FLEX_CENTER: &str = "flex min-h-[70vh] flex-col justify-center px-6 py-12 lg:px-8";
pub const SECTION_GRID: &str = "py-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4";

// Navigation
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/70 dark:bg-gray-800/70 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-black text-transparent bg-clip-text bg-gradient-to-r from-orange-500 to-pink-500";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-orange-600 dark:hover:text-orange-400 transition-colors duration-200";
pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 border-t border-gray-200/50 dark:border-gray-700/50";

// Cards
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-6";
pub const CARD_HOVER: &str = "block bg-white dark:bg-gray-800 rounded-2xl shadow-lg hover:shadow-xl p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";

// Buttons and inputs
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-semibold text-white bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-600 hover:to-pink-600 shadow-md disabled:opacity-50 transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 disabled:opacity-50";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-orange-600 dark:hover:text-orange-400 rounded-lg disabled:opacity-30 transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-orange-500 disabled:opacity-60";

// Wheel
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";
pub const SPIN_BUTTON_INNER: &str = "relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent";
pub const RESULT_BADGE: &str = "flex items-center justify-center px-6 py-4 rounded-xl text-white font-bold text-2xl shadow-lg border-2 border-white animate-bounce";
pub const RESET_LINK: &str = "text-sm text-gray-500 dark:text-gray-400 hover:underline disabled:opacity-50";

// Text
pub const HERO_TITLE_WRAPPER: &str = "text-center";
pub const TEXT_H1: &str = "text-3xl sm:text-4xl font-black text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";

pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-3 py-1 text-sm font-medium text-white hover:bg-red-700";
pub const BUTTON_ICON: &str = "inline-flex items-center justify-center w-8 h-8 rounded-full border border-gray-300 dark:border-gray-600 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const SELECT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white ring-1 ring-inset ring-gray-300 dark:ring-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_MUTED: &str = "text-sm text-gray-400 dark:text-gray-500";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

pub const WHEEL: &str = "relative mx-auto w-[300px] h-[300px] sm:w-[360px] sm:h-[360px]";
pub const WHEEL_POINTER: &str = "absolute left-1/2 -top-3 -translate-x-1/2 z-10 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[24px] border-l-transparent border-r-transparent border-t-red-600";
pub const WHEEL_ROTATOR: &str = "absolute inset-0 rounded-full will-change-transform";
pub const WHEEL_FACE: &str = "absolute inset-0 rounded-full border-4 border-white dark:border-gray-700 shadow-xl";
pub const WHEEL_LABEL: &str = "absolute left-1/2 top-1/2 flex flex-col items-center font-bold text-gray-900 leading-none pointer-events-none";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm cursor-pointer";
pub const MODAL_CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-2xl px-10 py-8 text-center";
pub const MODAL_TITLE: &str = "modal-title text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";

pub const HISTORY_LIST: &str = "mt-4 space-y-1 text-sm text-gray-700 dark:text-gray-300";

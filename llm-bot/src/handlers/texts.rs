//! Fixed reply texts (Russian). Plain text, safe to send with HTML parse mode.

pub const WELCOME_TEXT: &str = "🤖 Добро пожаловать!\n\n\
Я - простой Telegram бот с интеграцией LLM.\n\
Пока что я умею только отвечать на базовые команды.\n\n\
Доступные команды:\n\
/start - Показать это сообщение\n\
/help - Показать справку\n\n\
В будущих версиях я научусь общаться с помощью ИИ! 🚀";

/// Version marker comes from the package version.
pub const HELP_TEXT: &str = concat!(
    "📚 Справка по боту\n\n",
    "🔹 /start - Перезапустить бота и показать приветствие\n",
    "🔹 /help - Показать это сообщение с описанием команд\n\n",
    "ℹ️ Текущая версия: v",
    env!("CARGO_PKG_VERSION"),
    " (Базовый функционал)\n\n",
    "В этой версии бот может только отвечать на команды.\n",
    "Интеграция с ИИ будет добавлена в следующих итерациях.\n\n",
    "Если у вас есть вопросы - обратитесь к разработчику."
);

pub const FALLBACK_TEXT: &str = "🤔 Пока что я не умею обрабатывать обычные сообщения.\n\n\
Используйте доступные команды:\n\
/start - Перезапустить бота\n\
/help - Показать справку\n\n\
Интеграция с ИИ будет добавлена в следующих версиях! 🔄";

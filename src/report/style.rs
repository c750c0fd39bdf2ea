//! Stylesheet and external font links embedded in the report

pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;600;700&display=swap";

pub const STYLESHEET: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Noto Sans KR', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }
        .container { max-width: 1000px; margin: 0 auto; }
        header { text-align: center; margin-bottom: 30px; color: white; }
        header h1 { font-size: 1.8rem; font-weight: 700; margin-bottom: 8px; text-shadow: 0 2px 10px rgba(0,0,0,0.2); }
        header p { font-size: 0.9rem; opacity: 0.9; }
        .stats { display: flex; justify-content: center; flex-wrap: wrap; gap: 20px; margin-top: 15px; }
        .stat-item { background: rgba(255,255,255,0.2); padding: 10px 20px; border-radius: 20px; font-size: 0.85rem; backdrop-filter: blur(10px); }
        .lists-wrapper { display: flex; gap: 30px; }
        .list-section { flex: 1; min-width: 0; }
        .section-title {
            color: white;
            font-size: 1.2rem;
            font-weight: 700;
            margin: 30px 0 15px;
            padding-left: 10px;
            border-left: 4px solid #fff;
            text-shadow: 0 1px 3px rgba(0,0,0,0.2);
        }
        .user-list { display: flex; flex-direction: column; gap: 12px; }
        .empty { color: rgba(255,255,255,0.8); font-size: 0.9rem; padding-left: 14px; }
        .user-card {
            display: flex;
            align-items: center;
            background: white;
            padding: 16px;
            border-radius: 16px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
            transition: transform 0.2s ease, box-shadow 0.2s ease;
        }
        .user-card:hover { transform: translateY(-3px); box-shadow: 0 8px 25px rgba(0,0,0,0.15); }
        .user-card.failed { background: #f8f8f8; opacity: 0.8; }
        .user-card img { width: 56px; height: 56px; border-radius: 50%; object-fit: cover; border: 2px solid #eee; flex-shrink: 0; }
        .info { flex-grow: 1; margin-left: 14px; min-width: 0; }
        .username { font-weight: 600; font-size: 1rem; color: #262626; display: flex; align-items: center; gap: 6px; }
        .private-tag { font-size: 0.7rem; color: #ff6b6b; font-weight: 600; }
        .public-tag { font-size: 0.7rem; color: #51cf66; font-weight: 600; }
        .failed-tag { font-size: 0.7rem; color: #aaa; }
        .fullname { font-size: 0.85rem; color: #8e8e8e; margin-top: 2px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
        .btn {
            text-decoration: none;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 10px 20px;
            border-radius: 10px;
            font-weight: 600;
            font-size: 0.85rem;
            flex-shrink: 0;
            transition: opacity 0.2s ease, transform 0.2s ease;
        }
        .btn:hover { opacity: 0.9; transform: scale(1.02); }
        .btn.disabled { background: #ccc; cursor: not-allowed; }
        footer { text-align: center; margin-top: 30px; color: rgba(255,255,255,0.7); font-size: 0.8rem; }
        @media (max-width: 768px) { .lists-wrapper { flex-direction: column; } }
        @media (max-width: 480px) {
            .user-card { padding: 12px; }
            .user-card img { width: 48px; height: 48px; }
            .btn { padding: 8px 14px; font-size: 0.8rem; }
        }"#;

//! Built-in English → Korean term table.

use super::TermGroup;

pub(super) const BUILTIN_TERMS: &[(TermGroup, &str, &str)] = &[
    // Module and function comments
    (TermGroup::Comment, "Advanced system tray management module", "고급 시스템 트레이 관리 모듈"),
    (
        TermGroup::Comment,
        "Handles tray icon, context menu, notifications, and statistics display",
        "트레이 아이콘, 컨텍스트 메뉴, 알림, 통계 표시를 담당합니다",
    ),
    (
        TermGroup::Comment,
        "Custom protocol handlers and security management module",
        "커스텀 프로토콜 핸들러 및 보안 관리 모듈",
    ),
    (
        TermGroup::Comment,
        "Handles app-specific protocols, URL routing, and secure file access",
        "앱 전용 프로토콜, URL 라우팅, 보안 파일 접근을 처리합니다",
    ),
    (
        TermGroup::Comment,
        "Advanced system information and monitoring module",
        "고급 시스템 정보 및 모니터링 모듈",
    ),
    (
        TermGroup::Comment,
        "Handles system stats, browser detection, debug info, and permissions",
        "시스템 통계, 브라우저 감지, 디버그 정보, 권한을 처리합니다",
    ),
    (
        TermGroup::Comment,
        "Create tray icon with proper sizing for platform",
        "플랫폼에 맞는 적절한 크기의 트레이 아이콘 생성",
    ),
    (
        TermGroup::Comment,
        "Format duration in human readable format",
        "지속 시간을 사람이 읽기 쉬운 형식으로 포맷",
    ),
    (TermGroup::Comment, "Format numbers with commas", "숫자를 쉼표로 포맷"),
    (TermGroup::Comment, "Create context menu for tray", "트레이용 컨텍스트 메뉴 생성"),
    (
        TermGroup::Comment,
        "Update tray menu with current data",
        "현재 데이터로 트레이 메뉴 업데이트",
    ),
    (TermGroup::Comment, "Show main window", "메인 창 표시"),
    (TermGroup::Comment, "Toggle mini view", "미니 뷰 토글"),
    (TermGroup::Comment, "Show settings window", "설정 창 표시"),
    (TermGroup::Comment, "Reset statistics", "통계 리셋"),
    (TermGroup::Comment, "Show about dialog", "정보 대화상자 표시"),
    (TermGroup::Comment, "Send statistics tab change to renderer", "렌더러로 통계 탭 변경 전송"),
    (TermGroup::Comment, "Update tray statistics", "트레이 통계 업데이트"),
    (TermGroup::Comment, "Show tray notification", "트레이 알림 표시"),
    (
        TermGroup::Comment,
        "Set tray icon status (active/inactive)",
        "트레이 아이콘 상태 설정 (활성/비활성)",
    ),
    (TermGroup::Comment, "Flash tray icon for attention", "주의를 위해 트레이 아이콘 깜빡임"),
    (TermGroup::Comment, "Initialize system tray", "시스템 트레이 초기화"),
    (TermGroup::Comment, "Cleanup tray resources", "트레이 리소스 정리"),
    (TermGroup::Comment, "Get tray status", "트레이 상태 가져오기"),

    // Common comments
    (TermGroup::Comment, "Default options", "기본 옵션"),
    (TermGroup::Comment, "Get screen sources", "화면 소스 가져오기"),
    (TermGroup::Comment, "Capture the screen", "화면 캡처"),
    (TermGroup::Comment, "Convert to desired format", "원하는 형식으로 변환"),
    (TermGroup::Comment, "Generate filename and metadata", "파일명과 메타데이터 생성"),
    (TermGroup::Comment, "Auto-save if enabled", "활성화된 경우 자동 저장"),
    (TermGroup::Comment, "Add to history", "히스토리에 추가"),
    (TermGroup::Comment, "Notify renderer process", "렌더러 프로세스에 알림"),
    (TermGroup::Comment, "Remove from history", "히스토리에서 제거"),
    (TermGroup::Comment, "Get available sources", "사용 가능한 소스 가져오기"),
    (TermGroup::Comment, "Capture screenshot from specific source", "특정 소스에서 스크린샷 캡처"),
    (TermGroup::Comment, "Capture primary screen", "주 화면 캡처"),
    (TermGroup::Comment, "Setup keyboard event listeners", "키보드 이벤트 리스너 설정"),
    (TermGroup::Comment, "Register global shortcuts", "전역 단축키 등록"),
    (TermGroup::Comment, "Setup keyboard IPC handlers", "키보드 IPC 핸들러 설정"),
    (TermGroup::Comment, "Start keyboard monitoring", "키보드 모니터링 시작"),
    (TermGroup::Comment, "Stop keyboard monitoring", "키보드 모니터링 중지"),
    (TermGroup::Comment, "Initialize advanced keyboard system", "고급 키보드 시스템 초기화"),
    (TermGroup::Comment, "Cleanup keyboard resources", "키보드 리소스 정리"),
    (TermGroup::Comment, "Get keyboard system status", "키보드 시스템 상태 가져오기"),
    (
        TermGroup::Comment,
        "KeyboardManager class for compatibility with handlers",
        "핸들러와의 호환성을 위한 KeyboardManager 클래스",
    ),

    // Debug logs
    (TermGroup::Log, "Tray already initialized", "트레이가 이미 초기화되어 있습니다"),
    (TermGroup::Log, "Tray icon clicked", "트레이 아이콘이 클릭되었습니다"),
    (TermGroup::Log, "Tray right-clicked", "트레이를 우클릭했습니다"),
    (TermGroup::Log, "Tray double-clicked", "트레이를 더블클릭했습니다"),
    (TermGroup::Log, "System tray initialization completed", "시스템 트레이 초기화 완료"),
    (TermGroup::Log, "Tray cleanup completed", "트레이 정리 완료"),
    (TermGroup::Log, "Main window shown from tray", "트레이에서 메인 창 표시됨"),
    (TermGroup::Log, "Mini view toggled from tray", "트레이에서 미니 뷰 토글됨"),
    (TermGroup::Log, "Settings shown from tray", "트레이에서 설정 표시됨"),
    (TermGroup::Log, "Statistics reset from tray", "트레이에서 통계 리셋됨"),
    (TermGroup::Log, "About dialog shown from tray", "트레이에서 정보 대화상자 표시됨"),

    // Error messages
    (TermGroup::Error, "Tray menu update error:", "트레이 메뉴 업데이트 오류:"),
    (TermGroup::Error, "Tray click handler error:", "트레이 클릭 핸들러 오류:"),
    (TermGroup::Error, "Tray initialization error:", "트레이 초기화 오류:"),
    (TermGroup::Error, "Tray cleanup error:", "트레이 정리 오류:"),
    (TermGroup::Error, "Tray status update error:", "트레이 상태 업데이트 오류:"),
    (TermGroup::Error, "Failed to get screenshot sources:", "스크린샷 소스 가져오기 실패:"),
    (TermGroup::Error, "Screenshot capture error:", "스크린샷 캡처 오류:"),
    (TermGroup::Error, "Primary screen capture error:", "주 화면 캡처 오류:"),
    (TermGroup::Error, "Active window capture error:", "활성 창 캡처 오류:"),
    (TermGroup::Error, "Failed to load screenshot", "스크린샷 로드 실패"),
    (TermGroup::Error, "Failed to delete screenshot", "스크린샷 삭제 실패"),
    (TermGroup::Error, "Failed to clear screenshots:", "스크린샷 정리 실패:"),

    // Protocol handling
    (TermGroup::Log, "Protocol scheme registered:", "프로토콜 스킴 등록됨:"),
    (TermGroup::Log, "Protocol handler registered:", "프로토콜 핸들러 등록됨:"),
    (TermGroup::Error, "Failed to register protocol handler:", "프로토콜 핸들러 등록 실패:"),
    (TermGroup::Error, "Protocol scheme registration error:", "프로토콜 스킴 등록 오류:"),
    (TermGroup::Error, "Protocol handler registration error:", "프로토콜 핸들러 등록 오류:"),
    (
        TermGroup::Log,
        "Second instance detected with command line:",
        "명령줄과 함께 두 번째 인스턴스 감지됨:",
    ),
    (TermGroup::Log, "Open URL event:", "URL 열기 이벤트:"),
    (TermGroup::Log, "Handling deep link:", "딥 링크 처리 중:"),
    (TermGroup::Error, "Deep link handling error:", "딥 링크 처리 오류:"),
    (
        TermGroup::Log,
        "File protocol interceptor setup completed",
        "파일 프로토콜 인터셉터 설정 완료",
    ),
    (
        TermGroup::Error,
        "File protocol interceptor setup error:",
        "파일 프로토콜 인터셉터 설정 오류:",
    ),
    (TermGroup::Log, "Security configuration updated:", "보안 구성 업데이트됨:"),
    (TermGroup::Log, "Added allowed origin:", "허용된 원본 추가됨:"),
    (TermGroup::Log, "Removed allowed origin:", "허용된 원본 제거됨:"),
    (TermGroup::Log, "Protocol handlers setup completed", "프로토콜 핸들러 설정 완료"),
    (TermGroup::Error, "Protocol handlers setup error:", "프로토콜 핸들러 설정 오류:"),
    (TermGroup::Log, "Protocol handlers cleanup completed", "프로토콜 핸들러 정리 완료"),
    (TermGroup::Error, "Protocol handlers cleanup error:", "프로토콜 핸들러 정리 오류:"),

    // System info
    (
        TermGroup::Log,
        "System info module already initialized",
        "시스템 정보 모듈이 이미 초기화되어 있습니다",
    ),
    (TermGroup::Log, "System info module initialization completed", "시스템 정보 모듈 초기화 완료"),
    (TermGroup::Error, "System info module initialization error:", "시스템 정보 모듈 초기화 오류:"),
    (TermGroup::Log, "System info module cleanup completed", "시스템 정보 모듈 정리 완료"),
    (TermGroup::Error, "System info module cleanup error:", "시스템 정보 모듈 정리 오류:"),
    (TermGroup::Log, "System info IPC handlers registered", "시스템 정보 IPC 핸들러 등록됨"),

    // Screenshots
    (TermGroup::Log, "Screenshot saved:", "스크린샷 저장됨:"),
    (TermGroup::Log, "Screenshot deleted:", "스크린샷 삭제됨:"),

    // Keyboard
    (
        TermGroup::Log,
        "Advanced keyboard already initialized",
        "고급 키보드가 이미 초기화되어 있습니다",
    ),
    (TermGroup::Log, "Initializing advanced keyboard system...", "고급 키보드 시스템 초기화 중..."),
    (
        TermGroup::Log,
        "Advanced keyboard system initialization completed",
        "고급 키보드 시스템 초기화 완료",
    ),
    (TermGroup::Log, "Cleaning up advanced keyboard system...", "고급 키보드 시스템 정리 중..."),
    (TermGroup::Log, "Advanced keyboard system cleanup completed", "고급 키보드 시스템 정리 완료"),
    (
        TermGroup::Log,
        "Keyboard monitoring already active",
        "키보드 모니터링이 이미 활성화되어 있습니다",
    ),
    (TermGroup::Log, "Keyboard monitoring started", "키보드 모니터링 시작됨"),
    (TermGroup::Log, "Keyboard monitoring stopped", "키보드 모니터링 중지됨"),
    (TermGroup::Log, "Global shortcut registered:", "전역 단축키 등록됨:"),
    (TermGroup::Error, "Failed to register global shortcut", "전역 단축키 등록 실패"),
    (TermGroup::Log, "Typing statistics reset", "타이핑 통계 리셋"),
    (TermGroup::Log, "Keyboard IPC handlers registered", "키보드 IPC 핸들러 등록됨"),
    (TermGroup::Log, "Keyboard event listeners setup completed", "키보드 이벤트 리스너 설정 완료"),
    (TermGroup::Error, "Advanced keyboard initialization error:", "고급 키보드 초기화 오류:"),
    (TermGroup::Error, "Advanced keyboard cleanup error:", "고급 키보드 정리 오류:"),
    (TermGroup::Error, "Failed to start keyboard monitoring:", "키보드 모니터링 시작 실패:"),
    (TermGroup::Error, "Failed to stop keyboard monitoring:", "키보드 모니터링 중지 실패:"),
    (TermGroup::Error, "Failed to start listening:", "듣기 시작 실패:"),
    (TermGroup::Error, "Keyboard event listeners setup error:", "키보드 이벤트 리스너 설정 오류:"),
    (TermGroup::Error, "Global shortcut registration error:", "전역 단축키 등록 오류:"),
    (TermGroup::Error, "Key event queue processing error:", "키 이벤트 큐 처리 오류:"),
    (TermGroup::Error, "Key event processing error:", "키 이벤트 처리 오류:"),
    (TermGroup::Error, "Typing stats update error:", "타이핑 통계 업데이트 오류:"),
    (TermGroup::Log, "Hangul composition:", "한글 조합:"),

    // Status vocabulary, consulted last
    (TermGroup::Vocabulary, "Error", "오류"),
    (TermGroup::Vocabulary, "Warning", "경고"),
    (TermGroup::Vocabulary, "Success", "성공"),
    (TermGroup::Vocabulary, "Failed", "실패"),
    (TermGroup::Vocabulary, "Completed", "완료"),
    (TermGroup::Vocabulary, "Started", "시작됨"),
    (TermGroup::Vocabulary, "Stopped", "중지됨"),
    (TermGroup::Vocabulary, "Initialized", "초기화됨"),
    (TermGroup::Vocabulary, "Cleanup", "정리"),
    (TermGroup::Vocabulary, "Setup", "설정"),
    (TermGroup::Vocabulary, "Loading", "로딩 중"),
    (TermGroup::Vocabulary, "Saving", "저장 중"),
    (TermGroup::Vocabulary, "Processing", "처리 중"),
    (TermGroup::Vocabulary, "Connecting", "연결 중"),
    (TermGroup::Vocabulary, "Connected", "연결됨"),
    (TermGroup::Vocabulary, "Disconnected", "연결 해제됨"),
    (TermGroup::Vocabulary, "Invalid", "유효하지 않음"),
    (TermGroup::Vocabulary, "Valid", "유효함"),
    (TermGroup::Vocabulary, "Not found", "찾을 수 없음"),
    (TermGroup::Vocabulary, "Already exists", "이미 존재함"),
    (TermGroup::Vocabulary, "Permission denied", "권한 거부됨"),
    (TermGroup::Vocabulary, "Access denied", "접근 거부됨"),
    (TermGroup::Vocabulary, "Timeout", "시간 초과"),
    (TermGroup::Vocabulary, "Cancelled", "취소됨"),
    (TermGroup::Vocabulary, "Aborted", "중단됨"),
];

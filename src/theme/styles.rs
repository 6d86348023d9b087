//! Global CSS styles for the portfolio.
//!
//! Reveal transitions are written inline by the reveal binding; the sheet
//! only provides resting looks, keyframes and the overlays.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary-color: #667eea;
  --primary-dark: #5a67d8;
  --secondary-color: #10b981;
  --accent-color: #ef4444;
  --gradient-primary: linear-gradient(135deg, #667eea 0%, #764ba2 100%);

  --bg-dark: #0f172a;
  --bg-card: rgba(255, 255, 255, 0.06);
  --border-glass: rgba(255, 255, 255, 0.12);

  --text-primary: #f8fafc;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  --shadow-light: 0 4px 12px rgba(0, 0, 0, 0.15);
  --shadow-heavy: 0 10px 30px rgba(0, 0, 0, 0.35);

  --font-sans: 'Poppins', 'Segoe UI', system-ui, sans-serif;
  --radius: 16px;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-dark);
  color: var(--text-primary);
  line-height: 1.7;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

section {
  padding: 6rem 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
  background: var(--gradient-primary);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.glass-card {
  background: var(--bg-card);
  border: 1px solid var(--border-glass);
  border-radius: var(--radius);
  padding: 2rem;
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-light);
}

/* === Navigation === */
nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: 1.25rem 2rem;
  transition: background var(--transition-normal), padding var(--transition-normal);
}

nav.scrolled {
  background: rgba(15, 23, 42, 0.92);
  padding: 0.75rem 2rem;
  box-shadow: var(--shadow-light);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary-color);
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-normal);
}

.nav-links a:hover,
.nav-links a.active {
  color: var(--primary-color);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  max-width: none;
  background: radial-gradient(circle at top right, rgba(102, 126, 234, 0.25), transparent 60%);
}

.hero-container {
  max-width: 1200px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 3rem;
  align-items: center;
}

.greeting {
  color: var(--primary-color);
  font-weight: 600;
}

.hero-text h1 {
  font-size: 3rem;
  line-height: 1.2;
}

.subtitle {
  display: inline-block;
  min-height: 2.2rem;
  font-size: 1.5rem;
  color: var(--text-secondary);
  padding-right: 0.25rem;
  margin: 0.5rem 0 1.5rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.85rem 1.75rem;
  border-radius: 999px;
  font-weight: 600;
  font-size: 1rem;
  border: none;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.btn-primary {
  background: var(--gradient-primary);
  color: white;
}

.btn-primary:disabled {
  pointer-events: none;
  opacity: 0.8;
}

.btn-secondary {
  border: 2px solid var(--primary-color);
  color: var(--primary-color);
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-heavy);
}

.hero-image {
  display: flex;
  justify-content: center;
}

.hero-image img {
  width: 280px;
  height: 280px;
  border-radius: 50%;
  box-shadow: var(--shadow-heavy);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2rem;
}

.motto {
  margin-top: 1.5rem;
  font-style: italic;
  color: var(--primary-color);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.skill-category {
  background: var(--bg-card);
  border: 1px solid var(--border-glass);
  border-radius: var(--radius);
  padding: 2rem;
}

.skill-category h3 {
  margin-bottom: 1rem;
}

.skill-items {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.skill-item {
  padding: 0.5rem 1rem;
  border-radius: 999px;
  background: rgba(102, 126, 234, 0.15);
  color: var(--text-secondary);
  transition: all var(--transition-normal);
}

/* === Timeline === */
.timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
  padding-left: 2rem;
  border-left: 2px solid var(--border-glass);
}

.timeline-item {
  position: relative;
  margin-bottom: 2.5rem;
}

.timeline-dot {
  position: absolute;
  left: calc(-2rem - 7px);
  top: 0.5rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--primary-color);
}

.timeline-period {
  color: var(--primary-color);
  font-weight: 600;
  font-size: 0.9rem;
}

.timeline-place {
  color: var(--text-muted);
}

.timeline-content ul {
  margin-top: 0.5rem;
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  background: var(--bg-card);
  border: 1px solid var(--border-glass);
  border-radius: var(--radius);
  padding: 2rem;
}

.tech-stack {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-badge {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: 0.8rem;
  background: rgba(16, 185, 129, 0.15);
  color: var(--secondary-color);
  transition: transform 0.2s ease;
}

.project-link {
  margin-top: auto;
  color: var(--primary-color);
  font-weight: 600;
}

/* === Certifications === */
.cert-date {
  color: var(--primary-color);
  font-weight: 600;
}

.cert-issuer {
  color: var(--text-muted);
}

/* === Contact === */
.contact-container {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 2rem;
}

.social-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1.5rem;
}

.social-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.04);
  overflow: hidden;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-form input,
.contact-form textarea {
  width: 100%;
  padding: 0.85rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--border-glass);
  background: rgba(255, 255, 255, 0.04);
  color: var(--text-primary);
  font-family: inherit;
  font-size: 1rem;
}

.contact-form textarea {
  min-height: 150px;
  resize: vertical;
}

/* === Footer === */
footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  border-top: 1px solid var(--border-glass);
}

/* === Back To Top === */
#back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: none;
  background: var(--gradient-primary);
  color: white;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.3s ease;
  z-index: 900;
}

#back-to-top.visible {
  opacity: 1;
  pointer-events: auto;
}

/* === Scroll Indicator === */
.scroll-indicator {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 3px;
  z-index: 1001;
}

.scroll-progress {
  height: 100%;
  background: var(--gradient-primary);
  transition: width 0.1s linear;
}

/* === Loading Screen === */
.loading {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg-dark);
  z-index: 10001;
  transition: opacity 0.5s ease;
}

.loading.hidden {
  opacity: 0;
  pointer-events: none;
}

.loading-spinner {
  width: 50px;
  height: 50px;
  border: 3px solid var(--border-glass);
  border-top-color: var(--primary-color);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Notifications === */
.notification-stack {
  position: fixed;
  top: 20px;
  right: 20px;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  z-index: 10000;
}

.notification {
  color: white;
  padding: 1rem 1.5rem;
  border-radius: 10px;
  box-shadow: var(--shadow-heavy);
  font-weight: 500;
  transform: translateX(400px);
  transition: transform 0.3s ease;
}

.notification.success { background: var(--secondary-color); }
.notification.error { background: var(--accent-color); }
.notification.show { transform: translateX(0); }

.notification-content {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

/* === Effects === */
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  transform: scale(0);
  animation: ripple 0.6s linear;
  pointer-events: none;
}

@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

@keyframes rainbow {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

.cursor-particle {
  position: fixed;
  width: 6px;
  height: 6px;
  margin: -3px 0 0 -3px;
  border-radius: 50%;
  background: var(--primary-color);
  pointer-events: none;
  z-index: 9999;
  animation: particle-fade 0.6s ease-out forwards;
}

@keyframes particle-fade {
  to {
    transform: scale(0);
    opacity: 0;
  }
}

.boot-error {
  padding: 4rem 2rem;
  text-align: center;
  color: var(--accent-color);
}

/* === Responsive === */
@media (max-width: 768px) {
  .menu-toggle { display: block; }

  .nav-links {
    position: fixed;
    top: 64px;
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: rgba(15, 23, 42, 0.97);
    transform: translateY(-150%);
    transition: transform var(--transition-normal);
  }

  .nav-links.active { transform: translateY(0); }

  .hero-container,
  .about-grid,
  .contact-container {
    grid-template-columns: 1fr;
  }

  .hero-text h1 { font-size: 2.25rem; }
  section { padding: 4rem 1.25rem; }
}
"#;
